//! Validates rasterization: dimensions, stroking, determinism, idempotence

use image::Rgb;
use tessellate::geometry::Bounds;
use tessellate::render::color::{BLACK, WHITE};
use tessellate::render::{Canvas, RenderOptions, render};
use tessellate::tiling::{Family, TilingConfig, generate};

fn unit_options() -> RenderOptions {
    RenderOptions {
        pixels_per_unit: 1.0,
        stroke_width: 2.0,
        background: WHITE,
        stroke: BLACK,
    }
}

#[test]
fn test_square_grid_renders_stroked_lines_on_background() {
    let tiling = generate(&TilingConfig {
        family: Family::Square,
        scale: 10.0,
        width: 100.0,
        height: 100.0,
    })
    .expect("valid parameters");

    let image = render(&tiling, &unit_options()).expect("renderable");
    assert_eq!(image.dimensions(), (100, 100));

    // Cell interiors stay background, grid lines are stroked
    assert_eq!(*image.get_pixel(5, 5), WHITE);
    assert_eq!(*image.get_pixel(25, 34), WHITE);
    assert_eq!(*image.get_pixel(0, 0), BLACK);
    assert_eq!(*image.get_pixel(10, 5), BLACK);
    assert_eq!(*image.get_pixel(5, 10), BLACK);
    assert_eq!(*image.get_pixel(99, 50), BLACK);
}

#[test]
fn test_every_pixel_is_background_or_stroke() {
    for family in [Family::Triangular, Family::Square, Family::Hexagonal] {
        let tiling = generate(&TilingConfig {
            family,
            scale: 10.0,
            width: 50.0,
            height: 40.0,
        })
        .expect("valid parameters");

        let image = render(&tiling, &unit_options()).expect("renderable");
        for pixel in image.pixels() {
            assert!(
                *pixel == WHITE || *pixel == BLACK,
                "{family}: unexpected pixel color {pixel:?}"
            );
        }
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let tiling = generate(&TilingConfig {
        family: Family::Hexagonal,
        scale: 7.0,
        width: 60.0,
        height: 45.0,
    })
    .expect("valid parameters");

    let options = RenderOptions {
        pixels_per_unit: 4.0,
        ..RenderOptions::default()
    };
    let first = render(&tiling, &options).expect("renderable");
    let second = render(&tiling, &options).expect("renderable");
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_restroking_a_shared_edge_is_invisible() {
    let tiling = generate(&TilingConfig {
        family: Family::Square,
        scale: 10.0,
        width: 30.0,
        height: 30.0,
    })
    .expect("valid parameters");

    let options = unit_options();
    let stroked_once = render(&tiling, &options).expect("renderable");

    let mut canvas = Canvas::new(&options, tiling.bounds).expect("valid canvas");
    for cell in &tiling.cells {
        canvas.stroke_polygon(cell);
    }
    for cell in &tiling.cells {
        canvas.stroke_polygon(cell);
    }
    assert_eq!(stroked_once.as_raw(), canvas.into_image().as_raw());
}

#[test]
fn test_custom_colors_are_honored() {
    let tiling = generate(&TilingConfig {
        family: Family::Square,
        scale: 10.0,
        width: 20.0,
        height: 20.0,
    })
    .expect("valid parameters");

    let options = RenderOptions {
        pixels_per_unit: 1.0,
        stroke_width: 2.0,
        background: Rgb([200, 220, 255]),
        stroke: Rgb([120, 0, 0]),
    };
    let image = render(&tiling, &options).expect("renderable");
    assert_eq!(*image.get_pixel(5, 5), Rgb([200, 220, 255]));
    assert_eq!(*image.get_pixel(0, 0), Rgb([120, 0, 0]));
}

#[test]
fn test_canvas_rejects_out_of_range_dimensions() {
    let options = RenderOptions {
        pixels_per_unit: 1_000.0,
        ..RenderOptions::default()
    };
    assert!(Canvas::new(&options, Bounds::new(100.0, 100.0)).is_err());

    let tiny = RenderOptions {
        pixels_per_unit: 0.001,
        ..RenderOptions::default()
    };
    assert!(Canvas::new(&tiny, Bounds::new(100.0, 100.0)).is_err());

    let invalid = RenderOptions {
        stroke_width: 0.0,
        ..RenderOptions::default()
    };
    assert!(Canvas::new(&invalid, Bounds::new(100.0, 100.0)).is_err());
}
