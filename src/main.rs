//! cli-template entry point

use cli_template::App;
use std::process;

fn main() {
    let exit_code = App::new().run(std::env::args_os());
    process::exit(exit_code);
}
