//! Shape service
//!
//! Grows any shape without knowing which shape it is.

use std::sync::Arc;

use crate::domain::ports::{Logger, Shape};

pub struct ShapeService {
    log: Arc<dyn Logger>,
}

impl ShapeService {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self { log }
    }

    pub fn increase(&self, shape: &mut dyn Shape) {
        let before = shape.area();
        shape.increase_size();
        tracing::debug!(shape = shape.name(), before, after = shape.area(), "Increased shape");
    }

    /// Log "<label> area: <area>"
    pub fn report_area(&self, label: &str, shape: &dyn Shape) {
        self.log.info(&format!("{} area: {}", label, shape.area()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Rectangle, Square};
    use crate::test_utils::CapturingLogger;

    #[test]
    fn increase_works_for_every_shape() {
        let service = ShapeService::new(Arc::new(CapturingLogger::new()));
        let mut shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(10, 2)), Box::new(Square::new(5))];

        for shape in shapes.iter_mut() {
            service.increase(shape.as_mut());
        }

        let areas: Vec<u64> = shapes.iter().map(|s| s.area()).collect();
        assert_eq!(areas, vec![30, 36]);
    }

    #[test]
    fn report_area_uses_label() {
        let log = Arc::new(CapturingLogger::new());
        let service = ShapeService::new(log.clone());

        service.report_area("Updated Square", &Square::new(6));

        assert_eq!(log.infos(), vec!["Updated Square area: 36"]);
    }

    #[test]
    fn increase_handles_the_largest_square() {
        let log = Arc::new(CapturingLogger::new());
        let service = ShapeService::new(log.clone());
        let mut square = Square::new(u32::MAX);

        service.increase(&mut square);
        service.report_area("Square", &square);

        assert_eq!(log.infos(), vec!["Square area: 18446744065119617025"]);
    }
}
