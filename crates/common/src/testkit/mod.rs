/// Fixtures for exercising a tree in tests
///
/// Known values are computed for the root derived from the password
/// `"knockknockwhoisthere"` and its child `"Bob"`. Locations are given for an
/// empty cloud secret unless noted otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use common::testkit::{self, TestTree};
///
/// let tree = TestTree::new();
/// let root = tree.server.lookup(testkit::KNOCK_KNOCK_ROOT)?;
/// assert_eq!(root.decompose("Bob").ro_cap().to_string(), testkit::BOB_RO);
/// ```
mod tree;

pub use tree::TestTree;

pub const KNOCK_KNOCK_PASSWORD: &str = "knockknockwhoisthere";

pub const KNOCK_KNOCK_ROOT: &str = "rw-PTYUXAD3LWLNILDIRKCZ6VDHRVUGSZX3MJJRRYEDCX46VIEKB7SA";
pub const KNOCK_KNOCK_RO: &str = "ro-L2TL3M3RXD7YKOIC4FPMLTPFHPHULQCRRRVZ3M5UGFR5EXMTXOIQ";
pub const KNOCK_KNOCK_STORAGE_KEY: &str =
    "5ea6bdb371b8ff853902e15ec5cde53bcf45c0518c6b9db3b43163d25d93bb91";
pub const KNOCK_KNOCK_LOCATION: &str = "AZK/S47/GAXOU3GLAMD6MZLJHELS3EKDHK6CAJF4B6C2XEFVESUGTQ";
/// Location of the root under the cloud secret `"shared"`
pub const KNOCK_KNOCK_SHARED_LOCATION: &str =
    "LNI/DO3/GKJN47U63DNRAA6UNYBDAJIS5SRNCD3VXSOR6CXLMN6ASQ";

pub const BOB_RW: &str = "rw-OHVYDTQT54KVL2246CRCPAQ3CF2AFRU76CZQIDDJZ7MG5V3ABJYA";
pub const BOB_RO: &str = "ro-SPPX3QSWZC4VLGBJ3634TXG6KY55LM77UZ4KEXVLUNJQS2FW5F7A";
pub const BOB_STORAGE_KEY: &str =
    "93df7dc256c8b9559829dfb7c9dcde563bd5b3ffa678a25eaba3530968b6e97e";
pub const BOB_LOCATION: &str = "M3D/XCH/NV5Y6GVV3AOWNOSC4UNVH3A2TZVEOR4MZMX7YPR2BL3DMA";
