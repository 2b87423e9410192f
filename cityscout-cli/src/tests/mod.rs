//! Test modules for the Cityscout CLI.
