//! `blueprint stubs` command.

use crate::generate::stubs;

/// Execute the `stubs` command: list the embedded stub names.
///
/// # Errors
///
/// Never fails; the signature matches the other handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn run() -> Result<(), String> {
    println!("Embedded stubs (override with `build --stubs DIR`, as <name>.stub):");
    for name in stubs::names() {
        println!("  {name}");
    }
    Ok(())
}
