use super::prompt::ProvisioningRequest;
use super::{Invocation, Runner, PACKAGE_MANAGER};
use std::error::Error;
use std::path::Path;

/// Installed into every project.
pub const BASELINE_PACKAGES: [&str; 9] = [
    "clsx",
    "tailwind-merge",
    "tailwindcss-animate",
    "lucide-react",
    "date-fns",
    "zod",
    "react-hook-form",
    "@hookform/resolvers",
    "sonner",
];

pub const AUTH_PACKAGES: [&str; 2] = ["next-auth", "@auth/core"];
pub const ORM_PACKAGES: [&str; 2] = ["prisma", "@prisma/client"];

pub fn package_list(request: &ProvisioningRequest) -> Vec<&'static str> {
    let mut packages = BASELINE_PACKAGES.to_vec();
    if request.add_auth {
        packages.extend(AUTH_PACKAGES);
    }
    if request.add_prisma {
        packages.extend(ORM_PACKAGES);
    }
    packages
}

/// Install every package in a single `pnpm add`.
pub fn run(
    runner: &mut dyn Runner,
    project_dir: &Path,
    request: &ProvisioningRequest,
) -> Result<(), Box<dyn Error>> {
    log::info!("Installing dependencies...");
    let mut args = vec!["add"];
    args.extend(package_list(request));
    runner.run(&Invocation::new(PACKAGE_MANAGER, &args, project_dir))
}
