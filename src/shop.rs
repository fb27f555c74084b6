use crate::journal::Journal;

// =============================================================================
// Polymorphic resource: a capability with a default and an override
// =============================================================================

/// Something that can go shopping.
///
/// `do_shop` has a provided body, which is the base behavior. Implementors
/// that override it get their own version called even when they are only
/// reachable as `Box<dyn Shop>`, and their `Drop` still runs when that box
/// goes away.
pub trait Shop {
    fn journal(&self) -> &Journal;

    fn do_shop(&self) {
        self.journal().record("Base::doShop");
    }
}

/// Keeps the provided `do_shop`.
#[derive(Debug)]
pub struct Base {
    journal: Journal,
}

impl Base {
    pub fn new(journal: &Journal) -> Self {
        Base {
            journal: journal.clone(),
        }
    }
}

impl Shop for Base {
    fn journal(&self) -> &Journal {
        &self.journal
    }
}

/// Overrides `do_shop` and announces its own construction and teardown.
#[derive(Debug)]
pub struct Derived {
    journal: Journal,
}

impl Derived {
    pub fn new(journal: &Journal) -> Self {
        journal.record("Derived::Constructor");
        Derived {
            journal: journal.clone(),
        }
    }

    pub fn boxed(journal: &Journal) -> Box<Self> {
        Box::new(Self::new(journal))
    }

    /// One allocation owning `len` instances, constructed front to back.
    pub fn many(len: usize, journal: &Journal) -> Box<[Self]> {
        (0..len).map(|_| Self::new(journal)).collect()
    }
}

impl Shop for Derived {
    fn journal(&self) -> &Journal {
        &self.journal
    }

    fn do_shop(&self) {
        self.journal.record("Derived::doShop");
    }
}

impl Drop for Derived {
    fn drop(&mut self) {
        self.journal.record("Derived::Destructor");
    }
}

// =============================================================================
// Ownership transfer
// =============================================================================

/// Take ownership, use it, hand it back.
pub fn pass_through(derived: Box<Derived>) -> Box<Derived> {
    derived.do_shop();
    derived
}
