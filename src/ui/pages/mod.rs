pub mod assumptions;
pub mod contact;
pub mod domains;
pub mod report;

pub use assumptions::AssumptionsPage;
pub use contact::ContactPage;
pub use domains::DomainsPage;
pub use report::ReportPage;
