use super::*;

const LINE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10"><path d="M0 5 L20 5" stroke="#000" stroke-width="4" fill="none"/></svg>"##;

#[test]
fn rasterizes_at_scale() {
    let frame = rasterize_svg(LINE, 2.0, None).unwrap();
    assert_eq!((frame.width, frame.height), (40, 20));
    assert_eq!(frame.data.len(), 40 * 20 * 4);
    let mid = ((10 * 40 + 20) * 4) as usize;
    assert_eq!(frame.data[mid + 3], 255);
    assert_eq!(frame.data[3], 0);
}

#[test]
fn background_fills_transparent_pixels() {
    let frame = rasterize_svg(LINE, 1.0, Some([255, 255, 255, 255])).unwrap();
    assert_eq!(&frame.data[..4], &[255, 255, 255, 255]);
}

#[test]
fn invalid_input_is_a_render_error() {
    assert!(matches!(
        rasterize_svg("not svg", 1.0, None),
        Err(SigflowError::Render(_))
    ));
    assert!(rasterize_svg(LINE, 0.0, None).is_err());
}

#[test]
fn straight_alpha_undoes_premultiplication() {
    let frame = OverlayFrame {
        width: 1,
        height: 2,
        data: vec![64, 0, 0, 128, 0, 0, 0, 0],
    };
    assert_eq!(frame.to_straight_rgba8(), vec![128, 0, 0, 128, 0, 0, 0, 0]);
}
