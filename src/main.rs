//! attendlog main entrypoint.

use attendlog::run;
use attendlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        if e.is_rejection() {
            error(&e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
