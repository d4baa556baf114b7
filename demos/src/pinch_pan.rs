// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted touch gesture against an image viewport and prints the
//! transform produced for every frame.
//!
//! This stands in for a host event loop: in a real integration the samples
//! come from a windowing toolkit and each printed transform becomes a
//! composite call.

use kurbo::{Point, Size};
use pinchview_gesture::sample::{PointerPhase, PointerSample};
use pinchview_viewport::{Image, ImageViewport};

fn drive(vp: &mut ImageViewport, label: &str, sample: PointerSample<'_>) {
    let redraw = vp.handle_sample(sample);
    if redraw {
        if let Some(frame) = vp.render() {
            let t = frame.transform;
            println!(
                "{label:<24} scale {:.4}  translate ({:8.2}, {:8.2})",
                t.scale, t.translate.x, t.translate.y
            );
        }
    } else {
        println!("{label:<24} (no redraw)");
    }
}

fn main() {
    let mut vp = ImageViewport::with_view_size(Size::new(1000.0, 1000.0));
    vp.bind_image(Image::sized(2000.0, 1000.0));

    let frame = vp.render().expect("image and view size are set");
    println!(
        "initial fit              scale {:.4}  translate ({:8.2}, {:8.2})",
        frame.transform.scale, frame.transform.translate.x, frame.transform.translate.y
    );

    // Two-finger spread about the view center: zoom in to 2x the fit ratio.
    drive(
        &mut vp,
        "second finger down",
        PointerSample::new(
            PointerPhase::SecondaryDown,
            &[Point::new(400.0, 500.0), Point::new(600.0, 500.0)],
        ),
    );
    drive(
        &mut vp,
        "spread fingers",
        PointerSample::new(
            PointerPhase::Moved,
            &[Point::new(300.0, 500.0), Point::new(700.0, 500.0)],
        ),
    );
    drive(
        &mut vp,
        "second finger up",
        PointerSample::new(
            PointerPhase::SecondaryUp,
            &[Point::new(300.0, 500.0), Point::new(700.0, 500.0)],
        ),
    );

    // One-finger pan: the first move only seeds, then the image follows the
    // finger until the boundary check pins it.
    drive(
        &mut vp,
        "pan seed",
        PointerSample::new(PointerPhase::Moved, &[Point::new(500.0, 500.0)]),
    );
    for step in 1..=4 {
        let x = 500.0 - 150.0 * f64::from(step);
        drive(
            &mut vp,
            "pan left",
            PointerSample::new(PointerPhase::Moved, &[Point::new(x, 500.0)]),
        );
    }

    // Pinch back in; the zoom stops softly at the fit ratio.
    drive(
        &mut vp,
        "second finger down",
        PointerSample::new(
            PointerPhase::SecondaryDown,
            &[Point::new(300.0, 500.0), Point::new(700.0, 500.0)],
        ),
    );
    drive(
        &mut vp,
        "close fingers",
        PointerSample::new(
            PointerPhase::Moved,
            &[Point::new(450.0, 500.0), Point::new(550.0, 500.0)],
        ),
    );
    drive(
        &mut vp,
        "close fingers again",
        PointerSample::new(
            PointerPhase::Moved,
            &[Point::new(475.0, 500.0), Point::new(525.0, 500.0)],
        ),
    );

    let info = vp.debug_info();
    println!(
        "final                    ratio {:.4} (fit {:.4})  scaled {:.0}x{:.0}",
        info.total_ratio, info.init_ratio, info.scaled_size.width, info.scaled_size.height
    );
}
