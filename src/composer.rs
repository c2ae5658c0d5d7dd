use crate::matrix::{Hardware, OperatingSystem, Target};
use std::borrow::Cow;
use tracing::{debug, instrument};

mod blocks;

use blocks::PACKAGE_INDENT;

/// A rendered Dockerfile and the name it should be stored under
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub target: Target,
    pub filename: String,
    pub contents: String,
}

/// Render the Dockerfile for the target
#[instrument(skip_all, fields(%target))]
pub fn generate(target: Target) -> Artifact {
    let contents = compose(&target);
    debug!(bytes = contents.len(), "composed dockerfile");

    Artifact {
        target,
        filename: target.filename(),
        contents,
    }
}

/// Join the blocks for the target into a complete Dockerfile
pub fn compose(target: &Target) -> String {
    blocks_for(target).concat()
}

/// The ordered blocks making up the Dockerfile for the target
fn blocks_for(target: &Target) -> Vec<Cow<'static, str>> {
    let os = target.os().name();
    let version = target.version();
    let scripts = Cow::Owned(blocks::scripts(&target.script()));
    let install = install_block(target);

    match target.hardware() {
        Hardware::Cpu => vec![
            Cow::Owned(blocks::cpu_base(os, version)),
            Cow::Borrowed(blocks::MAINTAINER),
            install,
            Cow::Borrowed(blocks::CMAKE),
            Cow::Borrowed(blocks::LLVM),
            Cow::Borrowed(blocks::USER),
            Cow::Borrowed(blocks::CONDA),
            scripts,
        ],
        Hardware::Gpu => vec![
            Cow::Owned(blocks::gpu_base(version)),
            Cow::Borrowed(blocks::NVIDIA_DRIVER_CAPABILITIES),
            Cow::Borrowed(blocks::MAINTAINER),
            install,
            Cow::Borrowed(blocks::CMAKE),
            Cow::Borrowed(blocks::LLVM),
            Cow::Borrowed(blocks::VULKAN),
            Cow::Borrowed(blocks::USER),
            Cow::Borrowed(blocks::CONDA),
            scripts,
        ],
    }
}

/// The package installation block with any target-specific packages appended
fn install_block(target: &Target) -> Cow<'static, str> {
    let base = match target.hardware() {
        Hardware::Cpu => blocks::CPU_APT_INSTALL,
        Hardware::Gpu => blocks::GPU_APT_INSTALL,
    };

    let extra = extra_packages(target);
    if extra.is_empty() {
        return Cow::Borrowed(base);
    }

    // patched blocks end without a trailing newline
    let mut block = base.trim_end().to_owned();
    for package in extra {
        block.push_str(" \\\n");
        block.push_str(PACKAGE_INDENT);
        block.push_str(package);
    }

    Cow::Owned(block)
}

/// Additional packages required by specific operating system versions
fn extra_packages(target: &Target) -> &'static [&'static str] {
    match (target.os(), target.version(), target.hardware()) {
        (OperatingSystem::Ubuntu, "18.04", Hardware::Cpu) => &["zlib1g-dev"],
        (OperatingSystem::Ubuntu, "20.04", Hardware::Gpu) => {
            &["vulkan-tools", "vulkan-validationlayers-dev"]
        }
        _ => &[],
    }
}
