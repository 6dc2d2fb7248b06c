#![allow(non_snake_case)]

mod chart;
mod config;
mod controller;
mod error;
mod lab;
mod samples;
mod swatch;

use anyhow::Context;
use dioxus::{
    desktop::{Config, LogicalSize, WindowBuilder},
    logger::tracing::info,
    prelude::*,
};
use plotters_dioxus::{HoverData, Plotters};

use crate::chart::lab_chart;
use crate::config::AppConfig;
use crate::controller::{HoverEvent, use_hover_controller};
use crate::samples::SAMPLES;
use crate::swatch::{Swatch, resolve_swatch, swatch_caption};

static CSS_STYLE: Asset = asset!("/assets/styles.css");

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::default);
    let mut controller = use_hover_controller();

    // Chart and swatch subscribe to the same hover state independently.
    let chart_size = config.chart_size;
    let chart = use_memo(move || lab_chart(&SAMPLES, controller.selection(), chart_size));
    let swatch = use_memo(move || resolve_swatch(controller.selection(), &SAMPLES));
    let caption = use_memo(move || swatch_caption(controller.selection(), &SAMPLES));

    rsx! {
        document::Stylesheet { href: CSS_STYLE }
        div { class: "main_div",
            Plotters {
                chart,
                hover_radius: config.hover_radius,
                on_hover: move |data: HoverData| controller.dispatch(HoverEvent::PointerEnter(data)),
                on_unhover: move |_| controller.dispatch(HoverEvent::PointerLeave),
            }
            Swatch { style: swatch, caption }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    dioxus::logger::init(config.log_level()).context("failed to initialise logger")?;
    info!(
        "starting {} with {} colour samples",
        config.window_title,
        SAMPLES.len()
    );

    let (width, height) = config.window_size;
    LaunchBuilder::new()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(config.window_title)
                    .with_always_on_top(false)
                    .with_inner_size(LogicalSize::new(width, height)),
            ),
        )
        .launch(App);
    Ok(())
}
