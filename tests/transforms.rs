mod common;

use common::synthetic_image::{checkerboard, coordinate_grid};
use pixmorph::image::ppm::{decode, encode};
use pixmorph::transform::{
    apply_operations, blend_images, flip_horizontally, flip_vertically, grayscale, luminance,
    scale, Operation,
};
use pixmorph::{Color, Error, PixelGrid};

const TWO_BY_TWO: &str = "P3\n2 2\n255\n255 0 0  0 255 0  0 0 255  255 255 255\n";

fn sample_grids() -> Vec<PixelGrid> {
    vec![
        coordinate_grid(1, 1),
        coordinate_grid(5, 1),
        coordinate_grid(1, 4),
        coordinate_grid(7, 3),
        checkerboard(6, 6, 2, Color::new(12, 200, 40), Color::new(250, 3, 99)),
    ]
}

#[test]
fn flips_are_involutions() {
    for g in sample_grids() {
        assert_eq!(flip_horizontally(&flip_horizontally(&g)), g);
        assert_eq!(flip_vertically(&flip_vertically(&g)), g);
    }
}

#[test]
fn horizontal_flip_of_decoded_sample() {
    let grid = decode(TWO_BY_TWO).unwrap();
    let flipped = flip_horizontally(&grid);
    assert_eq!(
        flipped.to_rows(),
        vec![
            vec![Color::new(0, 255, 0), Color::new(255, 0, 0)],
            vec![Color::WHITE, Color::new(0, 0, 255)],
        ]
    );
}

#[test]
fn vertical_flip_of_decoded_sample() {
    let grid = decode(TWO_BY_TWO).unwrap();
    let flipped = flip_vertically(&grid);
    assert_eq!(
        flipped.to_rows(),
        vec![
            vec![Color::new(0, 0, 255), Color::WHITE],
            vec![Color::new(255, 0, 0), Color::new(0, 255, 0)],
        ]
    );
}

#[test]
fn grayscale_output_is_gray_everywhere() {
    for g in sample_grids() {
        let gray = grayscale(&g);
        assert_eq!(gray.dims(), g.dims());
        for (out, src) in gray.pixels().iter().zip(g.pixels()) {
            assert!(out.is_gray(), "{out} is not gray");
            assert_eq!(*out, luminance(*src));
        }
    }
}

#[test]
fn luminance_of_red_is_76() {
    assert_eq!(luminance(Color::new(255, 0, 0)), Color::new(76, 76, 76));
}

#[test]
fn scale_hits_requested_dimensions() {
    for g in sample_grids() {
        for (w, h) in [(1, 1), (3, 2), (2, 9), (16, 5)] {
            let s = scale(&g, w, h).unwrap();
            assert_eq!((s.width(), s.height()), (w, h));
        }
    }
}

#[test]
fn scale_to_same_size_is_identity() {
    for g in sample_grids() {
        assert_eq!(scale(&g, g.width(), g.height()).unwrap(), g);
    }
}

#[test]
fn integer_upscale_then_downscale_round_trips() {
    let g = coordinate_grid(4, 3);
    let up = scale(&g, 12, 6).unwrap();
    assert_eq!(scale(&up, 4, 3).unwrap(), g);
}

#[test]
fn scale_rejects_zero_dimensions() {
    let g = coordinate_grid(2, 2);
    assert!(matches!(scale(&g, 0, 0), Err(Error::InvalidDimension { .. })));
}

#[test]
fn blend_endpoints_return_inputs() {
    let g = coordinate_grid(4, 4);
    let h = checkerboard(4, 4, 1, Color::BLACK, Color::new(90, 180, 255));
    assert_eq!(blend_images(&g, &h, 1.0).unwrap(), g);
    assert_eq!(blend_images(&g, &h, 0.0).unwrap(), h);
}

#[test]
fn blend_requires_equal_dimensions() {
    let g = coordinate_grid(4, 4);
    let h = coordinate_grid(4, 5);
    assert!(matches!(
        blend_images(&g, &h, 0.5),
        Err(Error::DimensionMismatch {
            left: (4, 4),
            right: (4, 5)
        })
    ));
}

#[test]
fn decode_encode_round_trip_is_lossless() {
    for g in sample_grids() {
        let text = encode(&g);
        assert_eq!(decode(&text).unwrap(), g);
        assert_eq!(encode(&decode(&text).unwrap()), text);
    }
}

#[test]
fn operation_pipeline_runs_in_order() {
    let g = coordinate_grid(4, 2);
    let ops = [
        Operation::FlipHorizontal,
        Operation::Scale {
            width: 2,
            height: 2,
        },
        Operation::Grayscale,
    ];
    let out = apply_operations(&g, &ops).unwrap();
    let expected = grayscale(&scale(&flip_horizontally(&g), 2, 2).unwrap());
    assert_eq!(out, expected);
}

#[test]
fn operation_pipeline_propagates_errors() {
    let g = coordinate_grid(2, 2);
    let ops = [Operation::Scale {
        width: 0,
        height: 1,
    }];
    assert!(apply_operations(&g, &ops).is_err());
}
