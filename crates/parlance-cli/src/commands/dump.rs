use parlance_bytecode::dump;
use parlance_compiler::compile_str;
use parlance_core::Colors;

pub struct DumpArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let compiled = match compile_str::<()>(&args.pattern) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", dump(compiled.program(), Colors::new(args.color)));
}
