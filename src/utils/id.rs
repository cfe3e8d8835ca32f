use ulid::Ulid;

/// Source of fresh record ids. The only promise is uniqueness within the process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Default, Clone, Copy)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn next_id(&self) -> String {
        Ulid::new().to_string()
    }
}
