//! Binary entrypoint for the monhop CLI.
//!
//! Lists monitors or creates a window and places it on a chosen monitor.
//! Placement runs inside a winit event loop because monitor queries and
//! window control are only valid while the loop is active.

use std::process;

use clap::{Parser, Subcommand};
use logging as logshared;
use monselect::{MonitorSelector, PlacementQuirks};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};
use winit_displays::{WinitDisplays, WinitWindow};

#[derive(Parser, Debug)]
#[command(name = "monhop", about = "Move the application window onto a chosen monitor", version)]
/// Command-line interface for the `monhop` binary.
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,

    /// Move directly, skipping the platform's windowed-mode round-trip
    #[arg(long)]
    direct: bool,

    /// Logging controls
    #[command(flatten)]
    log: logshared::LogArgs,
}

#[derive(Subcommand, Clone, Copy, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Print monitor identifiers in enumeration order.
    Ids,
    /// Print monitor display names in enumeration order.
    Names,
    /// Open a window and place it on the monitor at INDEX (0-based).
    Place {
        /// Monitor index; out-of-range values do nothing
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Open a window and place it on the primary monitor.
    Primary,
}

impl Command {
    /// Whether this subcommand needs an application window.
    fn needs_window(self) -> bool {
        matches!(self, Self::Place { .. } | Self::Primary)
    }
}

/// winit application driving one command to completion.
struct App {
    /// The command being executed.
    command: Command,
    /// Placement quirks selected at startup.
    quirks: PlacementQuirks,
    /// The demo window, kept alive until the user closes it.
    window: Option<WinitWindow>,
    /// Guards against re-running the command on repeated resume events.
    done: bool,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.done {
            return;
        }
        self.done = true;

        let displays = WinitDisplays::new(event_loop);

        if !self.command.needs_window() {
            let sel = MonitorSelector::<_, &WinitWindow>::new(&displays, None, self.quirks);
            let entries = match self.command {
                Command::Ids => sel.monitor_ids(),
                _ => sel.monitor_names(),
            };
            for (i, entry) in entries.iter().enumerate() {
                println!("{}: {}", i, entry);
            }
            event_loop.exit();
            return;
        }

        match event_loop.create_window(Window::default_attributes().with_title("monhop")) {
            Ok(w) => self.window = Some(WinitWindow::new(w)),
            Err(e) => {
                error!("{}", winit_displays::Error::from(e));
                event_loop.exit();
                return;
            }
        }

        let sel = MonitorSelector::new(&displays, self.window.as_ref(), self.quirks);
        let placement = match self.command {
            Command::Place { index } => sel.place_on_monitor_signed(index),
            _ => sel.place_on_primary(),
        };
        println!("{placement}");
        if !placement.moved() {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Compute final filter spec via shared helpers and install a single
    // compact subscriber.
    let final_spec = logshared::compute_spec(
        cli.log.trace,
        cli.log.debug,
        cli.log.log_level.as_deref(),
        cli.log.log_filter.as_deref(),
    );
    let env_filter = logshared::env_filter_from_spec(&final_spec);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    let quirks = if cli.direct {
        PlacementQuirks::none()
    } else {
        PlacementQuirks::for_platform()
    };

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            error!("{}", winit_displays::Error::from(e));
            process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        command: cli.command,
        quirks,
        window: None,
        done: false,
    };
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("{}", winit_displays::Error::from(e));
        process::exit(1);
    }
}
