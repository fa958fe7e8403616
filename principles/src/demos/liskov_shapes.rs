//! Liskov substitution with shapes: any shape can be grown the same way.

use std::sync::Arc;

use crate::app::ShapeService;
use crate::domain::entities::{Rectangle, Square};
use crate::domain::ports::Logger;

pub fn run(log: Arc<dyn Logger>) {
    let service = ShapeService::new(log);
    let mut rectangle = Rectangle::new(10, 2);
    let mut square = Square::new(5);

    service.report_area("Rectangle", &rectangle);
    service.report_area("Square", &square);

    service.increase(&mut rectangle);
    service.increase(&mut square);

    service.report_area("Updated Rectangle", &rectangle);
    service.report_area("Updated Square", &square);
}
