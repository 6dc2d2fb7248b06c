#![allow(non_snake_case)]
use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use tokio::task;

use crate::chart::{ChartSpec, RenderedChart};
use crate::error::PlotError;
use crate::hover::HoverData;

async fn render_chart(spec: ChartSpec) -> Result<RenderedChart, PlotError> {
    let rendered = task::spawn_blocking(move || spec.render())
        .await
        .map_err(|e| PlotError::Join(e.to_string()))?;

    match &rendered {
        Ok(chart) => debug!(
            "rendered chart {}x{} with {} hit points",
            chart.size.0,
            chart.size.1,
            chart.hit_map.point_count()
        ),
        Err(e) => error!("chart render failed: {e}"),
    }
    rendered
}

/// Draws `chart` as an image and reports which plotted point the pointer rests on.
///
/// `on_hover` fires when the pointer moves onto a point (or from one point to
/// another); `on_unhover` fires when it leaves the last hovered point or the image.
#[component]
pub fn Plotters(
    #[props] chart: ReadSignal<ChartSpec>,
    #[props(default = 10.0)] hover_radius: f64,
    #[props(optional)] on_hover: Option<EventHandler<HoverData>>,
    #[props(optional)] on_unhover: Option<EventHandler<()>>,
) -> Element {
    let mut hovered = use_signal(|| None::<(usize, usize)>);

    let rendered = use_resource(move || {
        let spec = chart();
        async move { render_chart(spec).await }
    });

    let (width, height) = chart.read().size;

    let mut leave = move || {
        if hovered.peek().is_some() {
            hovered.set(None);
            if let Some(cb) = &on_unhover {
                cb.call(())
            }
        }
    };

    match &*rendered.read() {
        Some(Ok(plot)) => {
            let src = plot.data_uri();
            rsx! {
                img {
                    style: "user-select: none; -webkit-user-select: none;",
                    src: "{src}",
                    width: "{width}",
                    height: "{height}",
                    draggable: "false",
                    onmousemove: move |evt| {
                        let local = evt.data.coordinates().element();
                        let picked = match &*rendered.read() {
                            Some(Ok(plot)) => plot.hit_map.pick(local.x, local.y, hover_radius),
                            _ => None,
                        };
                        let key = picked
                            .as_ref()
                            .and_then(|h| h.first())
                            .map(|p| (p.curve_number, p.point_index));

                        match picked {
                            Some(data) => {
                                if key != *hovered.peek() {
                                    hovered.set(key);
                                    if let Some(cb) = &on_hover {
                                        cb.call(data)
                                    }
                                }
                            }
                            None => leave(),
                        }
                    },
                    onmouseout: move |_| leave(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            div {
                class: "plot-placeholder",
                width: "{width}px",
                height: "{height}px",
                "Chart unavailable: {e}"
            }
        },
        None => rsx! {
            div {
                class: "plot-placeholder",
                width: "{width}px",
                height: "{height}px",
                "Rendering chart..."
            }
        },
    }
}
