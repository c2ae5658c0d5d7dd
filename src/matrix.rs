use clap::ValueEnum;
use std::fmt::{self, Display, Formatter};

/// An operating system that Dockerfiles can be generated for
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ValueEnum)]
pub enum OperatingSystem {
    Windows,
    Macos,
    Ubuntu,
}

impl OperatingSystem {
    /// The name used in image references, file names, and script names
    pub fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Ubuntu => "ubuntu",
        }
    }

    /// The versions registered for the operating system, in generation order
    pub fn versions(self) -> &'static [&'static str] {
        match self {
            Self::Windows | Self::Macos => &[],
            Self::Ubuntu => &["18.04", "20.04"],
        }
    }

    /// Every registered target for the operating system on the given hardware
    pub fn targets(self, hardware: Hardware) -> impl Iterator<Item = Target> {
        self.versions().iter().map(move |&version| Target {
            os: self,
            version,
            hardware,
        })
    }
}

impl Display for OperatingSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The hardware backend the image is built for
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ValueEnum)]
pub enum Hardware {
    Cpu,
    Gpu,
}

impl Hardware {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
        }
    }
}

impl Display for Hardware {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single entry in the build matrix
///
/// Can only be constructed for versions registered with the operating system.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Target {
    os: OperatingSystem,
    version: &'static str,
    hardware: Hardware,
}

impl Target {
    /// Create a target, ensuring the version is registered for the operating system
    pub fn new(
        os: OperatingSystem,
        version: &str,
        hardware: Hardware,
    ) -> Result<Self, UnregisteredVersion> {
        let version = os
            .versions()
            .iter()
            .copied()
            .find(|&v| v == version)
            .ok_or_else(|| UnregisteredVersion {
                os,
                version: version.to_owned(),
            })?;

        Ok(Self {
            os,
            version,
            hardware,
        })
    }

    pub fn os(&self) -> OperatingSystem {
        self.os
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn hardware(&self) -> Hardware {
        self.hardware
    }

    /// The name of the Dockerfile generated for this target
    pub fn filename(&self) -> String {
        let Self {
            os,
            version,
            hardware,
        } = self;
        match hardware {
            Hardware::Cpu => format!("Dockerfile.{os}.{version}.cpu"),
            Hardware::Gpu => format!("Dockerfile.{os}.{version}"),
        }
    }

    /// The build and test script loaded into the image
    pub fn script(&self) -> String {
        let os = self.os;
        match self.hardware {
            Hardware::Cpu => format!("{os}_build_test_cpu.sh"),
            Hardware::Gpu => format!("{os}_build_test.sh"),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.os, self.version, self.hardware)
    }
}

/// The requested version is not part of the build matrix
#[derive(Debug, Eq, PartialEq)]
pub struct UnregisteredVersion {
    pub os: OperatingSystem,
    pub version: String,
}

impl Display for UnregisteredVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "version {:?} is not registered for {}", self.version, self.os)?;

        let known = self.os.versions();
        if known.is_empty() {
            write!(f, " (no versions are registered)")
        } else {
            write!(f, " (expected one of {})", known.join(", "))
        }
    }
}

impl std::error::Error for UnregisteredVersion {}
