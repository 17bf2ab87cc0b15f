use strum_macros::EnumIter;

/// The provisioning steps, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Step {
    CreateUser,
    CreateCollection,
    InsertSeed,
}

impl Step {
    pub fn position(&self) -> usize {
        match self {
            Step::CreateUser => 1,
            Step::CreateCollection => 2,
            Step::InsertSeed => 3,
        }
    }
}
