//! Command-line interface for the accessor generator and script harness.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cxr_gen::{CallOrder, MaxDepth, Template};
use cxr_harness::config::{DEFAULT_EXTENSION, DEFAULT_INTERPRETER};

#[derive(Parser)]
#[command(name = "cxr")]
#[command(about = "Composed list accessor generator", long_about = None)]
pub struct Cli {
    /// Log at debug level unless CXR_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `generate` with the reference settings
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one primitive registration entry per accessor
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Run every script in a directory through the interpreter
    Test(TestArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate(GenerateArgs::default())
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Longest accessor to generate, in head/tail steps
    #[arg(long, default_value_t = MaxDepth::REFERENCE.get() as i64, allow_negative_numbers = true)]
    pub depth: i64,

    /// Registration syntax to emit
    #[arg(long, value_enum, default_value_t = TemplateArg::Cpp)]
    pub template: TemplateArg,

    /// Which letter of the name is applied to the argument first
    #[arg(long, value_enum, default_value_t = OrderArg::Conventional)]
    pub order: OrderArg,

    /// Write the fragments to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            depth: MaxDepth::REFERENCE.get() as i64,
            template: TemplateArg::Cpp,
            order: OrderArg::Conventional,
            output: None,
        }
    }
}

#[derive(Args)]
pub struct TestArgs {
    /// Directory containing the scripts
    pub dir: PathBuf,

    /// Interpreter binary; each script is passed on its standard input
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: PathBuf,

    /// Extension of the script files, without the dot
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    /// C++ lambda entries for a `Variable` primitive table
    Cpp,
    /// `Primitive::new` entries for a Rust primitive table
    Rust,
    /// Accessor names only
    Names,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Cpp => Template::CppLambda,
            TemplateArg::Rust => Template::RustClosure,
            TemplateArg::Names => Template::Names,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// `cadr` takes the tail first, then the head
    Conventional,
    /// `cadr` takes the head first, then the tail
    Name,
}

impl From<OrderArg> for CallOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Conventional => CallOrder::Conventional,
            OrderArg::Name => CallOrder::NameOrder,
        }
    }
}
