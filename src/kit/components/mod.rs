// OrbitKit component module organization

// Input components
pub mod input;

// Data display
pub mod table;

// Re-export commonly used components
pub use input::InputField;
pub use table::DataTable;
