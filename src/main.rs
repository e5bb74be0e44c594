// Mon Feb 16 2026 - Alex

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use cpp_value_inspector::decode::DecoderRegistry;
use cpp_value_inspector::utils::LoggingUtils;
use cpp_value_inspector::{
    Address, DumpBuffer, ExpandSet, HostProfile, InspectConfig, InspectSession, JsonSerializer,
    TextRenderer, TypeCatalog,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "C++ container inspector for raw memory dumps", long_about = None)]
struct Args {
    /// Raw memory-dump file
    #[arg(short, long, required_unless_present = "list_decoders")]
    dump: Option<PathBuf>,

    /// Address the dump is mapped at
    #[arg(short, long, value_parser = parse_address, default_value = "0")]
    base: u64,

    /// Type catalog JSON describing the types in the dump
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Full type of the value to decode
    #[arg(short = 't', long = "type", required_unless_present = "list_decoders")]
    type_name: Option<String>,

    /// Address of the value inside the dump
    #[arg(short, long, value_parser = parse_address, required_unless_present = "list_decoders")]
    addr: Option<u64>,

    /// Pointer width of the dumped process
    #[arg(long, default_value_t = 8)]
    pointer_size: usize,

    /// How many child levels to materialize
    #[arg(short, long, default_value_t = 1)]
    expand_depth: usize,

    /// Front-end script runtime to mimic
    #[arg(long, default_value_t = HostProfile::Modern)]
    profile: HostProfile,

    /// Emit the display tree as JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(long)]
    no_color: bool,

    /// Show value addresses in text output
    #[arg(long)]
    show_addresses: bool,

    /// List the registered decoders and exit
    #[arg(long)]
    list_decoders: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_address(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}

fn list_decoders() {
    let registry = DecoderRegistry::builtin();
    println!("{}", "Registered decoders:".cyan().bold());
    for name in registry.names() {
        let hints = registry.format_hints(name).labels();
        if hints.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {} ({})", name, hints.join(", "));
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let dump_path = args.dump.as_ref().context("--dump is required")?;
    let type_name = args.type_name.as_ref().context("--type is required")?;
    let addr = args.addr.context("--addr is required")?;

    println!(
        "{} Loading dump: {}",
        "[*]".blue(),
        dump_path.display()
    );
    let dump = DumpBuffer::load(dump_path, Address::new(args.base))
        .with_context(|| format!("failed to load dump {}", dump_path.display()))?
        .with_pointer_size(args.pointer_size);
    println!(
        "{} Mapped {} bytes at {}",
        "[+]".green(),
        dump.len(),
        dump.base()
    );

    let catalog = match &args.catalog {
        Some(path) => TypeCatalog::load(path)
            .with_context(|| format!("failed to load type catalog {}", path.display()))?,
        None => TypeCatalog::with_defaults(args.pointer_size),
    };

    let config = InspectConfig {
        expand_depth: args.expand_depth,
        profile: args.profile,
        use_color: !args.no_color,
        ..InspectConfig::default()
    };
    let expansion = ExpandSet::to_depth(config.expand_depth);

    let session = InspectSession::new(Box::new(dump), catalog, config.clone());
    let value = session
        .value(type_name, Address::new(addr))
        .with_context(|| format!("cannot build a value of type '{}'", type_name))?;

    println!(
        "{} Decoding {} at 0x{:x}",
        "[*]".blue(),
        type_name,
        addr
    );
    let node = session.describe("value", &value, &expansion);

    if args.json {
        let text = JsonSerializer::new().to_string(&node)?;
        println!("{}", text);
    } else {
        let renderer = TextRenderer::new()
            .with_color(config.use_color)
            .with_addresses(args.show_addresses);
        print!("{}", renderer.render(&node));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    LoggingUtils::init(args.verbose as usize, !args.no_color);

    if args.list_decoders {
        list_decoders();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
