use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use disasmview::config::ViewerConfig;
use disasmview::model::text_repr::{KeywordKind, TextRepr};
use disasmview::model::{Block, Chunk, Entry, Listing};
use disasmview::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "disasmview", about = "Terminal viewer for disassembly listings")]
struct Cli {
    /// Path to a viewer config file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("disasmview=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::load(cli.config.as_deref())?;

    info!("disasmview starting");
    run_tui(sample_listing(), config).await
}

/// A small hand-written listing so the viewer has something to show.
fn sample_listing() -> Listing {
    let mut next_id = 100u64;
    let mut instruction = |addr: u64, tree: TextRepr, comment: &str| {
        next_id += 1;
        Entry::ChunkCollapsed {
            chunk: Chunk {
                id: next_id,
                addr_begin: addr,
                addr_end: addr + 4,
                display_name: String::new(),
                kind: "Instruction".into(),
                comment: comment.into(),
                text: Some(tree),
            },
        }
    };

    let mov = |dst: &str, src: &str| {
        TextRepr::Sublist(vec![
            TextRepr::opcode("mov"),
            TextRepr::blank(1),
            TextRepr::register(dst),
            TextRepr::text(", ", false),
            TextRepr::register(src),
        ])
    };

    let main_body = vec![
        instruction(0x1000, mov("ebp", "esp"), "prologue"),
        instruction(
            0x1004,
            TextRepr::Sublist(vec![
                TextRepr::opcode("push"),
                TextRepr::blank(1),
                TextRepr::Str("\"hello\"".into()),
            ]),
            "argument",
        ),
        instruction(
            0x1008,
            TextRepr::Sublist(vec![
                TextRepr::opcode("call"),
                TextRepr::blank(1),
                TextRepr::keyword(KeywordKind::Label, "puts"),
            ]),
            "",
        ),
        instruction(
            0x100c,
            TextRepr::Sublist(vec![
                TextRepr::opcode("mov"),
                TextRepr::blank(1),
                TextRepr::register("eax"),
                TextRepr::text(", ", false),
                TextRepr::Number("0x0".into()),
            ]),
            "return value",
        ),
        instruction(0x1010, TextRepr::opcode("ret"), "epilogue"),
    ];

    Listing::new(vec![
        Block {
            chunk: Chunk {
                id: 1,
                addr_begin: 0x1000,
                addr_end: 0x1014,
                display_name: "main".into(),
                kind: "Block".into(),
                comment: "program entry".into(),
                text: Some(TextRepr::text("...", true)),
            },
            body: main_body,
            collapsed: false,
        },
        Block {
            chunk: Chunk {
                id: 2,
                addr_begin: 0x1014,
                addr_end: 0x1030,
                display_name: "helper".into(),
                kind: "Block".into(),
                comment: "collapsed by default".into(),
                text: Some(TextRepr::Sublist(vec![
                    TextRepr::text("...", true),
                    TextRepr::blank(1),
                    TextRepr::Number("7".into()),
                    TextRepr::text(" instructions", false),
                ])),
            },
            body: vec![],
            collapsed: true,
        },
    ])
}
