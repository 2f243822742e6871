//! PCB view rendering: layer filtering, colors and component-qualified labels

use boardsvg::circuit::{
    BoardPoint, CircuitElement, PcbComponent, PcbPlatedHole, PcbSmtPad, PlatedHoleShape,
    SmtPadShape, SourceComponent,
};
use boardsvg::{
    ColorMap, ElementName, PadLabelProfile, PcbContext, SvgObject, ViewTransform,
    create_svg_objects_from_pcb_plated_hole, create_svg_objects_from_smt_pad,
};
use insta::assert_snapshot;

fn circuit() -> Vec<CircuitElement> {
    vec![
        CircuitElement::PcbComponent(PcbComponent {
            pcb_component_id: "pcb_component_0".to_string(),
            source_component_id: Some("source_component_0".to_string()),
        }),
        CircuitElement::SourceComponent(SourceComponent {
            source_component_id: "source_component_0".to_string(),
            name: Some("R1".to_string()),
        }),
    ]
}

fn pad(layer: &str, port_hints: &[&str], x: f64, y: f64, shape: SmtPadShape) -> PcbSmtPad {
    PcbSmtPad {
        pcb_smtpad_id: "pcb_smtpad_0".to_string(),
        pcb_component_id: Some("pcb_component_0".to_string()),
        x,
        y,
        layer: layer.to_string(),
        port_hints: port_hints.iter().map(|s| s.to_string()).collect(),
        shape,
    }
}

fn circle_pad(layer: &str, port_hints: &[&str]) -> PcbSmtPad {
    let shape = SmtPadShape::Circle { radius: 1.0 };
    pad(layer, port_hints, 0.0, 0.0, shape)
}

fn all_shapes() -> Vec<SmtPadShape> {
    vec![
        SmtPadShape::Rect {
            width: 1.0,
            height: 1.0,
        },
        SmtPadShape::RotatedRect {
            width: 1.0,
            height: 1.0,
            ccw_rotation: Some(45.0),
        },
        SmtPadShape::Pill {
            width: 2.0,
            height: 1.0,
            radius: 0.5,
        },
        SmtPadShape::Circle { radius: 1.0 },
        SmtPadShape::Polygon {
            points: vec![
                BoardPoint::new(0.0, 0.0),
                BoardPoint::new(1.0, 0.0),
                BoardPoint::new(0.0, 1.0),
            ],
        },
    ]
}

fn identity() -> PcbContext {
    PcbContext::new(ViewTransform::IDENTITY)
}

fn scaled(sx: f64, sy: f64, tx: f64, ty: f64) -> PcbContext {
    PcbContext::new(ViewTransform::scale_translate(sx, sy, tx, ty).unwrap())
}

fn render(pad: &PcbSmtPad, ctx: &PcbContext) -> Vec<SvgObject> {
    create_svg_objects_from_smt_pad(pad, ctx, &[])
}

#[test]
fn circle_pad_without_hints_gets_placeholder_label() {
    let ctx = PcbContext::new(ViewTransform::uniform_scale(2.0).unwrap());
    let p = PcbSmtPad {
        pcb_component_id: None,
        ..pad("top", &[], 10.0, 5.0, SmtPadShape::Circle { radius: 0.5 })
    };
    let objects = render(&p, &ctx);

    assert_eq!(objects.len(), 2);
    let circle = &objects[0];
    assert_eq!(circle.name, ElementName::Circle);
    let keys: Vec<_> = circle.attributes.keys().copied().collect();
    assert_eq!(keys, ["class", "fill", "cx", "cy", "r", "data-layer"]);
    assert_eq!(circle.attr("class"), Some("pcb-pad"));
    assert_eq!(circle.attr("fill"), Some("rgb(200, 52, 52)"));
    assert_eq!(circle.attr("cx"), Some("20"));
    assert_eq!(circle.attr("cy"), Some("10"));
    assert_eq!(circle.attr("r"), Some("1"));
    assert_eq!(circle.attr("data-layer"), Some("top"));

    let label = &objects[1];
    assert_eq!(label.name, ElementName::Text);
    assert_eq!(label.text_content(), "X");
    let keys: Vec<_> = label.attributes.keys().copied().collect();
    assert_eq!(
        keys,
        [
            "x",
            "y",
            "fill",
            "font-family",
            "font-size",
            "text-anchor",
            "dominant-baseline",
            "transform"
        ]
    );
    assert_eq!(label.attr("fill"), Some("#ffffff"));
    assert_eq!(label.attr("font-size"), Some("10"));
    assert_eq!(label.attr("transform"), Some("translate(20 10)"));
}

#[test]
fn layer_filter_hides_every_shape_on_other_layers() {
    let ctx = identity().with_layer_filter("top");
    let circuit = circuit();
    for shape in all_shapes() {
        let bottom = pad("bottom", &["1"], 0.0, 0.0, shape.clone());
        let objects = create_svg_objects_from_smt_pad(&bottom, &ctx, &circuit);
        assert!(objects.is_empty(), "{shape:?} rendered on a filtered layer");

        let top = pad("top", &["1"], 0.0, 0.0, shape);
        let objects = create_svg_objects_from_smt_pad(&top, &ctx, &circuit);
        assert_eq!(objects.len(), 2);
    }
}

#[test]
fn no_filter_shows_all_layers_in_their_colors() {
    let ctx = identity();
    let bottom = render(&circle_pad("bottom", &["1"]), &ctx);
    assert_eq!(bottom[0].attr("fill"), Some("rgb(77, 127, 196)"));

    let unknown = render(&circle_pad("silkscreen", &["1"]), &ctx);
    assert_eq!(unknown[0].attr("fill"), Some("white"));
}

#[test]
fn custom_color_map_recolors_pads_and_holes() {
    let mut colors = ColorMap::default();
    colors.copper.top = "gold".to_string();
    colors.drill = "black".to_string();
    let ctx = identity().with_color_map(colors);

    let pads = render(&circle_pad("top", &["1"]), &ctx);
    assert_eq!(pads[0].attr("fill"), Some("gold"));

    let hole = PcbPlatedHole {
        pcb_plated_hole_id: "pcb_plated_hole_0".to_string(),
        pcb_component_id: None,
        x: 0.0,
        y: 0.0,
        port_hints: Vec::new(),
        shape: PlatedHoleShape::Circle {
            outer_diameter: 2.0,
            hole_diameter: 1.0,
        },
    };
    let objects = create_svg_objects_from_pcb_plated_hole(&hole, &ctx, &[]);
    let parts: Vec<_> = objects[0].elements().collect();
    assert_eq!(parts[0].attr("fill"), Some("gold"));
    assert_eq!(parts[1].attr("fill"), Some("black"));
}

#[test]
fn pad_label_names_component() {
    let p = circle_pad("top", &["2"]);
    let objects = create_svg_objects_from_smt_pad(&p, &identity(), &circuit());
    assert_eq!(objects[1].text_content(), "R1.2");
}

#[test]
fn placeholder_label_is_also_qualified() {
    let p = circle_pad("top", &[]);
    let objects = create_svg_objects_from_smt_pad(&p, &identity(), &circuit());
    assert_eq!(objects[1].text_content(), "R1.X");
}

#[test]
fn minimal_labels_skip_component_name() {
    let ctx = identity().with_pad_labels(PadLabelProfile::Minimal);
    let p = circle_pad("top", &["2"]);
    let objects = create_svg_objects_from_smt_pad(&p, &ctx, &circuit());
    assert_eq!(objects[1].text_content(), "2");
    assert_eq!(objects[1].attr("font-size"), Some("5"));
}

#[test]
fn rotated_rect_uses_local_origin_and_transform() {
    let shape = SmtPadShape::RotatedRect {
        width: 2.0,
        height: 1.0,
        ccw_rotation: Some(90.0),
    };
    let objects = render(&pad("top", &["1"], 3.0, 4.0, shape), &identity());

    let rect = &objects[0];
    let keys: Vec<_> = rect.attributes.keys().copied().collect();
    assert_eq!(
        keys,
        ["class", "fill", "x", "y", "width", "height", "transform", "data-layer"]
    );
    assert_eq!(rect.attr("x"), Some("-1"));
    assert_eq!(rect.attr("y"), Some("-0.5"));
    assert_eq!(rect.attr("width"), Some("2"));
    assert_eq!(rect.attr("height"), Some("1"));
    // no mirroring, so the board angle is kept as is
    assert_snapshot!(rect.attr("transform").unwrap(), @"translate(3 4) rotate(90)");
    assert_eq!(objects[1].attr("transform"), rect.attr("transform"));
}

#[test]
fn rotation_survives_scaling_under_flipped_y() {
    let shape = SmtPadShape::RotatedRect {
        width: 2.0,
        height: 1.0,
        ccw_rotation: Some(30.0),
    };
    let p = pad("top", &["1"], 1.0, 1.0, shape);

    let unit = render(&p, &scaled(1.0, -1.0, 0.0, 0.0));
    assert_eq!(
        unit[0].attr("transform"),
        Some("translate(1 -1) rotate(-30)")
    );
    assert_eq!(unit[0].attr("width"), Some("2"));
    assert_eq!(unit[0].attr("height"), Some("1"));

    let objects = render(&p, &scaled(5.0, -5.0, 0.0, 0.0));
    let rect = &objects[0];
    assert_snapshot!(rect.attr("transform").unwrap(), @"translate(5 -5) rotate(-30)");
    assert_eq!(objects[1].attr("transform"), rect.attr("transform"));
    assert_eq!(rect.attr("x"), Some("-5"));
    assert_eq!(rect.attr("y"), Some("-2.5"));
    assert_eq!(rect.attr("width"), Some("10"));
    assert_eq!(rect.attr("height"), Some("5"));
}

#[test]
fn unrotated_rotated_rect_is_plain_rect() {
    for ccw_rotation in [Some(0.0), None] {
        let shape = SmtPadShape::RotatedRect {
            width: 2.0,
            height: 1.0,
            ccw_rotation,
        };
        let objects = render(&pad("top", &["1"], 3.0, 4.0, shape), &identity());

        let rect = &objects[0];
        assert_eq!(rect.attr("x"), Some("2"));
        assert_eq!(rect.attr("y"), Some("3.5"));
        assert_eq!(rect.attr("transform"), None);
        assert_eq!(objects[1].attr("transform"), Some("translate(3 4)"));
    }
}

#[test]
fn pill_pad_scales_axes_independently() {
    let shape = SmtPadShape::Pill {
        width: 2.0,
        height: 1.0,
        radius: 0.5,
    };
    let ctx = scaled(2.0, 3.0, 0.0, 0.0);
    let objects = render(&pad("top", &["1"], 0.0, 0.0, shape), &ctx);

    let rect = &objects[0];
    assert_eq!(rect.attr("width"), Some("4"));
    assert_eq!(rect.attr("height"), Some("3"));
    assert_eq!(rect.attr("rx"), Some("1"));
    assert_eq!(rect.attr("ry"), Some("1"));
}

#[test]
fn polygon_points_go_through_transform() {
    let shape = SmtPadShape::Polygon {
        points: vec![
            BoardPoint::new(0.0, 0.0),
            BoardPoint::new(1.0, 0.0),
            BoardPoint::new(0.5, 1.0),
        ],
    };
    let ctx = scaled(2.0, 2.0, 10.0, 0.0);
    let objects = render(&pad("top", &["1"], 0.5, 0.25, shape), &ctx);

    assert_snapshot!(objects[0].attr("points").unwrap(), @"10,0 12,0 11,2");
    assert_eq!(objects[1].attr("transform"), Some("translate(11 0.5)"));
}

#[test]
fn flipped_y_keeps_positive_sizes() {
    let shape = SmtPadShape::Rect {
        width: 1.0,
        height: 0.5,
    };
    let ctx = scaled(10.0, -10.0, 100.0, 100.0);
    let objects = render(&pad("top", &["1"], 1.0, 2.0, shape), &ctx);

    let rect = &objects[0];
    assert_eq!(rect.attr("x"), Some("105"));
    assert_eq!(rect.attr("y"), Some("77.5"));
    assert_eq!(rect.attr("width"), Some("10"));
    assert_eq!(rect.attr("height"), Some("5"));
}

#[test]
fn unsupported_pad_renders_nothing() {
    let p = pad("top", &["1"], 0.0, 0.0, SmtPadShape::Unsupported);
    let objects = render(&p, &identity());
    assert!(objects.is_empty());
}

#[test]
fn plated_hole_label_names_component() {
    let hole = PcbPlatedHole {
        pcb_plated_hole_id: "pcb_plated_hole_0".to_string(),
        pcb_component_id: Some("pcb_component_0".to_string()),
        x: 1.0,
        y: 2.0,
        port_hints: vec!["2".to_string()],
        shape: PlatedHoleShape::Pill {
            outer_width: 1.0,
            outer_height: 2.0,
            hole_width: 0.5,
            hole_height: 1.0,
        },
    };
    // Holes ignore the layer filter.
    let ctx = identity().with_layer_filter("bottom");
    let objects = create_svg_objects_from_pcb_plated_hole(&hole, &ctx, &circuit());

    assert_eq!(objects.len(), 2);
    let parts: Vec<_> = objects[0].elements().collect();
    assert_eq!(parts[0].attr("class"), Some("pcb-hole-outer"));
    assert_eq!(parts[0].attr("fill"), Some("rgb(200, 52, 52)"));
    assert_eq!(parts[1].attr("class"), Some("pcb-hole-inner"));
    assert_eq!(parts[1].attr("fill"), Some("#FF26E2"));

    let label = &objects[1];
    assert_eq!(label.text_content(), "R1.2");
    assert_eq!(label.attr("class"), Some("pcb-hole-number"));
    assert_eq!(label.attr("x"), Some("1"));
    assert_eq!(label.attr("y"), Some("2"));
    assert_eq!(label.attr("fill"), Some("#ffffff"));
    assert_eq!(label.attr("font-size"), Some("10"));
}

#[test]
fn plated_hole_scales_pill_with_the_view() {
    let hole = PcbPlatedHole {
        pcb_plated_hole_id: "pcb_plated_hole_0".to_string(),
        pcb_component_id: None,
        x: 1.0,
        y: 1.0,
        port_hints: Vec::new(),
        shape: PlatedHoleShape::Pill {
            outer_width: 2.0,
            outer_height: 4.0,
            hole_width: 1.0,
            hole_height: 2.0,
        },
    };
    let ctx = scaled(3.0, -3.0, 0.0, 0.0);
    let objects = create_svg_objects_from_pcb_plated_hole(&hole, &ctx, &[]);

    let parts: Vec<_> = objects[0].elements().collect();
    assert_snapshot!(
        parts[0].attr("d").unwrap(),
        @"M0,-6 v6 a3,3 0 0 0 6,0 v-6 a3,3 0 0 0 -6,0 z"
    );
    assert_snapshot!(
        parts[1].attr("d").unwrap(),
        @"M1.5,-4.5 v3 a1.5,1.5 0 0 0 3,0 v-3 a1.5,1.5 0 0 0 -3,0 z"
    );
}

#[test]
fn plated_hole_without_component_uses_id_suffix() {
    let hole = PcbPlatedHole {
        pcb_plated_hole_id: "pcb_plated_hole_4".to_string(),
        pcb_component_id: Some("pcb_component_9".to_string()),
        x: 0.0,
        y: 0.0,
        port_hints: Vec::new(),
        shape: PlatedHoleShape::Circle {
            outer_diameter: 2.0,
            hole_diameter: 1.0,
        },
    };
    let objects = create_svg_objects_from_pcb_plated_hole(&hole, &identity(), &circuit());
    assert_eq!(objects[1].text_content(), "4");
}
