use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dispatch_bench")]
#[command(
    about = "Measures virtual call, function pointer, generic wrapper and type erasure dispatch cost"
)]
#[command(version)]
pub struct Cli {}
