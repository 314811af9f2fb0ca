mod fs_vault;

pub use fs_vault::FsVault;
