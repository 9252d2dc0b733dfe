use circle_engine::{client_to_canvas, Point};

/// Top-left corner of the element's bounding rect, in client coordinates.
pub fn canvas_origin(canvas_id: &str) -> Option<Point> {
    let element = web_sys::window()?.document()?.get_element_by_id(canvas_id)?;
    let rect = element.get_bounding_client_rect();
    Some(Point::new(rect.left(), rect.top()))
}

/// Map a pointer position from client to canvas coordinates.
/// Falls back to the identity mapping if the canvas cannot be found.
pub fn to_canvas(canvas_id: &str, client_x: f64, client_y: f64) -> Point {
    let client = Point::new(client_x, client_y);
    match canvas_origin(canvas_id) {
        Some(origin) => client_to_canvas(client, origin),
        None => {
            log::debug!("canvas #{canvas_id} not found, using client coordinates");
            client
        }
    }
}
