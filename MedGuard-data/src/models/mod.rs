// Data models shared by the catalogues and the external clients
pub mod drug;
pub mod encyclopedia;
pub mod pill;
pub mod scan;
