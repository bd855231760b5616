use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use rosbag_info::{
    bag_menu, is_bag_directory, metadata_path, open_with_default_handler, MenuItem, SummaryBuilder,
};

#[derive(Subcommand)]
enum Command {
    /// Report summary information about a ROS2 bag directory
    Info {
        /// The bag directory to inspect.
        path: PathBuf,
    },
    /// Exit 0 if the path is a ROS2 bag directory, 1 otherwise
    Check {
        /// The directory to test.
        path: PathBuf,
    },
    /// Open the bag's metadata.yaml with the OS default handler
    Open {
        /// The bag directory whose sidecar to open.
        path: PathBuf,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

/// Parse the CLI arguments and run the CLI.
pub fn run() -> Result<ExitCode> {
    let Args { cmd } = Args::parse();

    match cmd {
        Command::Info { path } => {
            info(&path)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { path } => Ok(if is_bag_directory(&path) {
            ExitCode::SUCCESS
        } else {
            debug!("'{}' is not a ROS2 bag directory", path.display());
            ExitCode::FAILURE
        }),
        Command::Open { path } => {
            open(&path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn info(path: &Path) -> Result<()> {
    let Some(sidecar) = metadata_path(path) else {
        bail!("'{}' is not a ROS2 bag directory", path.display());
    };

    let summary = SummaryBuilder::new().summarize(&sidecar);
    print_menu(&bag_menu(path, &summary), 0);

    Ok(())
}

fn open(path: &Path) -> Result<()> {
    let Some(sidecar) = metadata_path(path) else {
        bail!("'{}' is not a ROS2 bag directory", path.display());
    };

    open_with_default_handler(&sidecar);

    Ok(())
}

/// Print the menu tree the way a file manager would nest it.
fn print_menu(item: &MenuItem, depth: usize) {
    println!("{:indent$}{}", "", item.label, indent = depth * 2);

    for child in &item.children {
        print_menu(child, depth + 1);
    }
}
