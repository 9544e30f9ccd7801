use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::use_wizard_config;
use crate::core::format::format_coord;
use crate::i18n;
use crate::overlay::{HeatmapGrid, Point, RouteOverlay, RouteVariant};
use crate::t;
use crate::wizard::{PinCoordinate, UploadedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayMode {
    Heatmap,
    Route,
}

/// Uploaded image with the decorative heatmap or route drawn on top. The
/// SVG uses the frame measured at pin time as its view box, so it scales
/// with the rendered image.
#[component]
pub fn OverlayPanel(image: UploadedImage, pin: PinCoordinate) -> Element {
    let _lang = i18n::use_language();
    let config = use_wizard_config();
    let frame = pin.frame;
    let origin = Point::from(pin);

    let mut mode = use_signal(|| OverlayMode::Heatmap);
    let mut variant = use_signal(RouteVariant::default);
    let mut generation = use_signal(|| 0u64);

    let heatmap_tuning = config.heatmap.clone();
    let heatmap = use_memo(move || {
        let run = generation();
        debug!(run, "regenerating heatmap");
        HeatmapGrid::generate(frame, Some(origin), &heatmap_tuning, &mut rand::thread_rng())
    });

    let route_tuning = config.route.clone();
    let route = use_memo(move || {
        let run = generation();
        let variant = variant();
        debug!(run, ?variant, "regenerating route");
        RouteOverlay::generate(frame, Some(origin), variant, &route_tuning, &mut rand::thread_rng())
    });

    let view_box = format!("0 0 {} {}", format_coord(frame.width), format_coord(frame.height));
    let current_mode = mode();
    let run = generation();
    let grid = heatmap();
    let drawn = route();
    let variant_label = match variant() {
        RouteVariant::Smooth => t!("overlay-variant-squiggly"),
        RouteVariant::Squiggly => t!("overlay-variant-smooth"),
    };
    let route_class = match drawn.variant {
        RouteVariant::Smooth => "overlay__route",
        RouteVariant::Squiggly => "overlay__route overlay__route--squiggly",
    };

    rsx! {
        div { class: "overlay",
            div { class: "overlay__controls",
                button {
                    r#type: "button",
                    class: if current_mode == OverlayMode::Heatmap { "button button--primary" } else { "button button--ghost" },
                    onclick: move |_| mode.set(OverlayMode::Heatmap),
                    {t!("overlay-heatmap")}
                }
                button {
                    r#type: "button",
                    class: if current_mode == OverlayMode::Route { "button button--primary" } else { "button button--ghost" },
                    onclick: move |_| mode.set(OverlayMode::Route),
                    {t!("overlay-route")}
                }
                if current_mode == OverlayMode::Route {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| variant.with_mut(|v| *v = v.toggled()),
                        "{variant_label}"
                    }
                }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: move |_| generation += 1,
                    {t!("overlay-regenerate")}
                }
            }

            div { class: "overlay__stage",
                img { class: "overlay__image", src: "{image.url}", alt: t!("upload-image-alt") }
                svg {
                    class: "overlay__svg",
                    "viewBox": "{view_box}",
                    "preserveAspectRatio": "none",

                    if current_mode == OverlayMode::Heatmap {
                        for cell in grid.visible_cells() {
                            rect {
                                key: "{cell.col}-{cell.row}",
                                class: "overlay__cell",
                                x: "{format_coord(cell.x)}",
                                y: "{format_coord(cell.y)}",
                                width: "{format_coord(cell.width)}",
                                height: "{format_coord(cell.height)}",
                                fill: cell.band().fill(),
                                "fill-opacity": "{cell.band().opacity()}",
                            }
                        }
                    } else {
                        for (i, branch) in drawn.branches.iter().enumerate() {
                            path {
                                key: "{run}-{i}",
                                class: "overlay__branch",
                                d: "{branch.d}",
                                "pathLength": "1",
                                style: "--reveal: {branch.reveal:.2}; animation-delay: {branch.delay_ms}ms;",
                            }
                        }
                        path {
                            class: route_class,
                            d: "{drawn.d}",
                            "pathLength": "1",
                        }
                        circle {
                            class: "overlay__destination",
                            cx: "{format_coord(drawn.end.x)}",
                            cy: "{format_coord(drawn.end.y)}",
                            r: "6",
                        }
                    }

                    circle {
                        class: "overlay__pin",
                        cx: "{format_coord(origin.x)}",
                        cy: "{format_coord(origin.y)}",
                        r: "7",
                    }
                }
            }
        }
    }
}
