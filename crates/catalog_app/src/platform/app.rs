use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use catalog_core::{update, AppState, Msg, Paginator};
use catalog_logging::{catalog_info, catalog_warn};
use clap::Parser;

use super::cli::Cli;
use super::config::{self, API_KEY_ENV};
use super::effects::EffectRunner;
use super::logging;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = match config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(err) => (config::AppConfig::default(), Some(err)),
    };
    logging::initialize(&config, cli.log_level.as_deref());
    if let Some(err) = config_error {
        catalog_warn!("{}; using defaults", err);
    }

    let settings = config.catalog_settings(std::env::var(API_KEY_ENV).ok());
    if settings.api_key.is_empty() {
        catalog_warn!("no API key configured; set {} or api_key in the config", API_KEY_ENV);
    }
    let page_cap = settings.page_cap;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx.clone()).context("starting catalog engine")?;
    spawn_input_reader(msg_tx.clone());

    let mut state = AppState::with_paginator(Paginator::new(page_cap));
    let _ = msg_tx.send(Msg::SortChanged(config.sort_key()));
    let _ = msg_tx.send(Msg::AppStarted);
    if let Some(category_id) = cli.category.or(config.initial_category) {
        let _ = msg_tx.send(Msg::CategorySelected {
            category_id,
            name: None,
        });
    }

    catalog_info!("catalog browser started");
    // Drain everything queued before rendering once.
    while let Ok(first) = msg_rx.recv() {
        let mut shutdown = dispatch(&mut state, &runner, first);
        while let Ok(msg) = msg_rx.try_recv() {
            shutdown |= dispatch(&mut state, &runner, msg);
        }
        if shutdown {
            break;
        }
        if state.consume_dirty() {
            print_view(&state);
        }
    }

    catalog_info!("catalog browser stopped");
    Ok(())
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, msg: Msg) -> bool {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects)
}

fn print_view(state: &AppState) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "\n{}> ", ui::render::render(&state.view()));
    let _ = stdout.flush();
}

fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match ui::input::parse_command(&line) {
                Ok(Some(ui::input::Command::Dispatch(msg))) => {
                    if msg_tx.send(msg).is_err() {
                        return;
                    }
                }
                Ok(Some(ui::input::Command::Help)) => println!("{}", ui::input::HELP),
                Ok(None) => {}
                Err(err) => println!("{err}"),
            }
        }
        let _ = msg_tx.send(Msg::QuitRequested);
    });
}
