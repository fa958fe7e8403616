//! Bird contracts
//!
//! Flying and swimming are separate capabilities. A bird exposes the ones it
//! has through `as_flyer` / `as_swimmer`; the defaults report neither.

use crate::domain::capability::Capability;
use crate::domain::ports::Logger;

pub trait Flyer {
    fn fly(&self, log: &dyn Logger);
}

pub trait Swimmer {
    fn swim(&self, log: &dyn Logger);
}

pub trait Bird {
    fn name(&self) -> &str;

    fn as_flyer(&self) -> Option<&dyn Flyer> {
        None
    }

    fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        None
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Fly => self.as_flyer().is_some(),
            Capability::Swim => self.as_swimmer().is_some(),
            _ => false,
        }
    }

    /// Every capability this bird supports, in declaration order
    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.supports(*c))
            .collect()
    }
}
