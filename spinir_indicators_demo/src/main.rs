// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact sheet of every indicator shape, dumped as SVG.
mod svg;

use kurbo::Size;
use peniko::Color;
use peniko::color::palette::css;
use spinir_indicators::{IndicatorShape, IndicatorSpec};

// One distinct paint per cell; which color an indicator gets at runtime is the
// animation controller's business, so the sheet just cycles a fixed palette.
const PALETTE: [Color; 10] = [
    css::TOMATO,
    css::GOLD,
    css::MEDIUM_SEA_GREEN,
    css::DEEP_SKY_BLUE,
    css::ORCHID,
    css::CORAL,
    css::TURQUOISE,
    css::KHAKI,
    css::SALMON,
    css::LIGHT_GREEN,
];

fn label(shape: IndicatorShape) -> &'static str {
    match shape {
        IndicatorShape::Circle => "circle",
        IndicatorShape::CircleSemi => "circle-semi",
        IndicatorShape::Ring => "ring",
        IndicatorShape::RingTwoHalfVertical => "ring-2half-v",
        IndicatorShape::RingTwoHalfHorizontal => "ring-2half-h",
        IndicatorShape::RingThirdFour => "ring-3quarter",
        IndicatorShape::Rectangle => "rectangle",
        IndicatorShape::Triangle => "triangle",
        IndicatorShape::Line => "line",
        IndicatorShape::Pacman => "pacman",
    }
}

fn main() {
    let cell = Size::new(40.0, 40.0);
    let mut sheet = svg::SvgSheet::new(cell);

    for (shape, color) in IndicatorShape::ALL.into_iter().zip(PALETTE) {
        let drawable = IndicatorSpec::new(shape, cell).with_color(color).drawable();
        sheet.push(label(shape), drawable);
    }

    std::fs::write("spinir_indicators_demo.svg", sheet.to_svg_string())
        .expect("write spinir_indicators_demo.svg");
    println!("wrote spinir_indicators_demo.svg");
}
