//! # photo-tidy CLI
//!
//! Command-line interface for the photo tidier.
//!
//! ## Usage
//! ```bash
//! photo-tidy organize ~/Photos/shoot-01
//! photo-tidy tidy ~/Photos/shoot-01 --verbose
//! ```

mod cli;

use photo_tidier::Result;

fn main() -> Result<()> {
    cli::run()
}
