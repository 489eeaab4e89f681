use martone_core::interaction::Rect;
use web_sys as web;

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> (f64, f64) {
    (ev.client_x() as f64, ev.client_y() as f64)
}
