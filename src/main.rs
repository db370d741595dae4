use std::env;
use std::process;

fn main() {
    env_logger::init();

    match regexp_builder::run(env::args().skip(1)) {
        Ok(pattern) => println!("{}", pattern),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    }
}
