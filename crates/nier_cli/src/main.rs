use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use nier_core::core_api::{
    CoreError, DEFAULT_LANGUAGE, Engine, ItemCatalog, Session, parse_play_time,
};
use nier_core::layout::PLAYER_NAME_MAX_UNITS;
use nier_core::platform::{self, Platform};
use nier_render::{
    FieldSelection, TextRenderOptions, render_json_full, render_json_selected,
    render_selected_pairs, render_text,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Only show warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Show debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show save metadata.
    Info(InfoArgs),
    /// Modify one or more fields and write the save back.
    Set(SetArgs),
    /// Convert between PC and console formats.
    Convert(ConvertArgs),
    /// Write a translation template covering every known id.
    Skeleton(SkeletonArgs),
}

#[derive(Debug, Args)]
struct InfoArgs {
    #[arg(value_name = "FILE")]
    path: PathBuf,
    #[arg(long)]
    json: bool,
    /// List the occupied inventory, weapon and chip slots.
    #[arg(long = "slots")]
    slots: bool,
    #[arg(long, value_name = "LANG", default_value = DEFAULT_LANGUAGE)]
    lang: String,
    #[arg(long = "i18n-dir", value_name = "DIR")]
    i18n_dir: Option<PathBuf>,
    #[arg(long)]
    platform: bool,
    #[arg(long)]
    name: bool,
    #[arg(long = "play-time")]
    play_time: bool,
    #[arg(long)]
    chapter: bool,
    #[arg(long)]
    level: bool,
    #[arg(long)]
    xp: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    inventory: bool,
    #[arg(long = "corpse-inventory")]
    corpse_inventory: bool,
    #[arg(long)]
    weapons: bool,
    #[arg(long)]
    chips: bool,
}

impl InfoArgs {
    fn fields(&self) -> FieldSelection {
        FieldSelection {
            platform: self.platform,
            name: self.name,
            play_time: self.play_time,
            chapter: self.chapter,
            level: self.level,
            xp: self.xp,
            money: self.money,
            inventory: self.inventory,
            corpse_inventory: self.corpse_inventory,
            weapons: self.weapons,
            chips: self.chips,
        }
    }
}

#[derive(Debug, Args)]
struct SetArgs {
    #[arg(value_name = "FILE")]
    path: PathBuf,
    /// Write the result here instead of overwriting FILE.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    #[arg(long)]
    name: Option<String>,
    /// Play time as HH:MM:SS.
    #[arg(long, value_name = "HH:MM:SS")]
    time: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    money: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    xp: Option<i32>,
    /// Set XP to the threshold of this level.
    #[arg(long, conflicts_with = "xp")]
    level: Option<i32>,
    #[arg(long)]
    chapter: Option<i32>,
    #[arg(long = "add-item", value_name = "ID[:QTY]", value_parser = parse_item_arg)]
    add_item: Vec<(i32, i32)>,
    #[arg(long = "remove-item", value_name = "INDEX")]
    remove_item: Vec<usize>,
    /// Physical format to write; defaults to the format that was read.
    #[arg(long, value_name = "pc|console")]
    export: Option<Platform>,
}

impl SetArgs {
    fn has_edits(&self) -> bool {
        self.name.is_some()
            || self.time.is_some()
            || self.money.is_some()
            || self.xp.is_some()
            || self.level.is_some()
            || self.chapter.is_some()
            || !self.add_item.is_empty()
            || !self.remove_item.is_empty()
            || self.export.is_some()
    }
}

#[derive(Debug, Args)]
#[command(group(clap::ArgGroup::new("direction").required(true).args(["to_pc", "to_console"])))]
struct ConvertArgs {
    #[arg(value_name = "FILE")]
    path: PathBuf,
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    #[arg(long = "to-pc")]
    to_pc: bool,
    #[arg(long = "to-console")]
    to_console: bool,
}

#[derive(Debug, Args)]
struct SkeletonArgs {
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Command::Info(args) => cmd_info(&args),
        Command::Set(args) => cmd_set(&args),
        Command::Convert(args) => cmd_convert(&args),
        Command::Skeleton(args) => cmd_skeleton(&args),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_info(args: &InfoArgs) {
    log::debug!("info: file={}", args.path.display());
    let session = open_session(&args.path);
    let catalog = match &args.i18n_dir {
        Some(dir) => ItemCatalog::load_from_dir(dir, &args.lang).unwrap_or_else(|e| {
            eprintln!("Error loading translations: {e}");
            process::exit(1);
        }),
        None => ItemCatalog::builtin(),
    };
    let fields = args.fields();

    if args.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&session, &fields, &catalog)
        } else {
            render_json_full(&session, &catalog)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_any_selected() {
        print!("{}", render_selected_pairs(&session, &fields, &catalog));
        return;
    }

    let options = TextRenderOptions {
        verbose: args.slots,
    };
    print!("{}", render_text(&session, &catalog, options));
    log::info!("displayed metadata for {}", args.path.display());
}

fn cmd_set(args: &SetArgs) {
    if !args.has_edits() {
        eprintln!("set requires at least one field to change");
        process::exit(2);
    }

    let mut session = open_session(&args.path);

    if let Some(name) = &args.name {
        let name = truncate_name(name);
        apply("name", session.set_player_name(&name));
        println!("  name = {name}");
    }
    if let Some(time) = &args.time {
        let seconds = parse_play_time(time).unwrap_or_else(|e| fail("play time", e));
        apply("play time", session.set_play_time(seconds));
        println!("  play_time = {time}");
    }
    if let Some(money) = args.money {
        apply("money", session.set_money(money));
        println!("  money = {money}");
    }
    if let Some(xp) = args.xp {
        apply("xp", session.set_experience(xp));
        println!("  xp = {xp}");
    }
    if let Some(level) = args.level {
        apply("level", session.set_level(level));
        println!("  level = {level} (xp = {})", session.snapshot().experience);
    }
    if let Some(chapter) = args.chapter {
        apply("chapter", session.set_chapter(chapter));
        println!("  chapter = {chapter}");
    }
    for &index in &args.remove_item {
        apply("item removal", session.remove_item(index));
        println!("  removed item slot {index}");
    }
    for &(id, quantity) in &args.add_item {
        let index = session
            .add_item(id, quantity)
            .unwrap_or_else(|e| fail("item", e));
        println!("  added item {id} x{quantity} at slot {index}");
    }

    let target = args.export.unwrap_or_else(|| session.platform());
    let bytes = session
        .to_bytes_for(target)
        .unwrap_or_else(|e| fail("save serialization", e));
    let destination = args.output.as_deref().unwrap_or(&args.path);
    write_file(destination, &bytes);
    log::info!("saved {target} save to {}", destination.display());
    println!("Saved to {}", destination.display());
}

fn cmd_convert(args: &ConvertArgs) {
    let bytes = read_file(&args.path);
    let (converted, direction) = if args.to_pc {
        (platform::console_to_pc(&bytes), "console -> PC")
    } else {
        (platform::pc_to_console(&bytes), "PC -> console")
    };
    let converted = converted.unwrap_or_else(|e| fail("conversion", e));
    log::info!("conversion {direction} succeeded for {}", args.path.display());

    let destination = args.output.as_deref().unwrap_or(&args.path);
    write_file(destination, &converted);
    println!("Converted ({direction}) and wrote to {}", destination.display());
}

fn cmd_skeleton(args: &SkeletonArgs) {
    let skeleton = ItemCatalog::skeleton();
    let rendered = serde_json::to_string_pretty(&skeleton).unwrap_or_else(|e| {
        eprintln!("Error rendering translation template: {e}");
        process::exit(1);
    });

    match &args.output {
        Some(path) => {
            write_file(path, format!("{rendered}\n").as_bytes());
            log::info!("wrote {} template entries to {}", skeleton.len(), path.display());
        }
        None => println!("{rendered}"),
    }
}

fn open_session(path: &Path) -> Session {
    let bytes = read_file(path);
    Engine::new().open_bytes(bytes, None).unwrap_or_else(|e| {
        eprintln!("Error parsing save file: {}", path.display());
        eprintln!("  {e}");
        process::exit(1);
    })
}

fn read_file(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    })
}

fn write_file(path: &Path, bytes: &[u8]) {
    fs::write(path, bytes).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", path.display());
        process::exit(1);
    });
}

fn apply(what: &str, result: Result<(), CoreError>) {
    if let Err(e) = result {
        fail(what, e);
    }
}

fn fail(what: &str, e: CoreError) -> ! {
    eprintln!("Error applying {what} edit: {e}");
    process::exit(1);
}

/// Keep at most the number of UTF-16 units the name field holds.
fn truncate_name(name: &str) -> String {
    let mut units = 0;
    let truncated: String = name
        .chars()
        .take_while(|ch| {
            units += ch.len_utf16();
            units <= PLAYER_NAME_MAX_UNITS
        })
        .collect();
    if truncated.len() < name.len() {
        log::warn!("player name truncated to {PLAYER_NAME_MAX_UNITS} characters");
    }
    truncated
}

fn parse_item_arg(value: &str) -> Result<(i32, i32), String> {
    let (id, quantity) = match value.split_once(':') {
        Some((id, quantity)) => (id, quantity),
        None => (value, "1"),
    };
    let id = id
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("invalid item id '{id}'"))?;
    let quantity = quantity
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("invalid item quantity '{quantity}'"))?;
    if quantity <= 0 {
        return Err(format!("item quantity must be positive, got {quantity}"));
    }
    Ok((id, quantity))
}
