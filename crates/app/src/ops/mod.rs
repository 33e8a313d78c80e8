pub mod attenuate;
pub mod derive;
pub mod init;
pub mod root;
pub mod show;
pub mod storage;
pub mod version;

pub use attenuate::Attenuate;
pub use derive::Derive;
pub use init::Init;
pub use root::Root;
pub use show::Show;
pub use storage::Storage;
pub use version::Version;
