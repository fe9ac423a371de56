pub mod spdx_file;
