//! Five-in-a-row GUI
//!
//! A graphical interface for playing against the AI or another player.

use clap::{Parser, ValueEnum};
use five_in_row::ui::FiveInRowApp;
use five_in_row::{Cell, GameController, GameMode, DEFAULT_BOARD_SIZE};
use tracing::error;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Side length of the board (at most 50)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Start this mode right away instead of showing the mode menu
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Symbol played by the human in PvE
    #[arg(long, value_enum, default_value_t = SymbolArg::X)]
    human: SymbolArg,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Pve,
}

#[derive(Clone, Copy, ValueEnum)]
enum SymbolArg {
    X,
    O,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let mut game = match GameController::new(args.board_size) {
        Ok(game) => game,
        Err(err) => {
            error!("{err}");
            std::process::exit(2);
        }
    };

    if let Some(mode) = args.mode {
        let mode = match mode {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Pve => GameMode::HumanVsAI,
        };
        let human = match args.human {
            SymbolArg::X => Cell::X,
            SymbolArg::O => Cell::O,
        };
        if let Err(err) = game.start_game(mode, human) {
            error!("{err}");
            std::process::exit(2);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 960.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(|cc| Ok(Box::new(FiveInRowApp::new(cc, game)))),
    )
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
