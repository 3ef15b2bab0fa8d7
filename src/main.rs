//! Collapse Launcher setup toolkit.
//!
//! `collapse_setup <PUBLISH_DIR> <Stable|Preview> <WSX_ONLY>`

use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = collapse_setup::cli::run().await;

    // Unix keeps only the low byte of the status; i32::MIN would read as success.
    #[cfg(not(windows))]
    let exit_code = if exit_code != 0 && exit_code & 0xff == 0 {
        1
    } else {
        exit_code
    };

    process::exit(exit_code);
}
