use crate::error::LaunchError;
use crate::install::InstallRoot;
use crate::platform::Platform;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// A fully resolved argv plan: one program plus its ordered arguments.
///
/// Building an invocation never touches the filesystem or spawns anything,
/// so command construction can be inspected and tested separately from
/// execution. [`Invocation::run`] spawns the child with inherited standard
/// streams and blocks until it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    fn new(program: impl Into<OsString>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The complete argument vector, program first.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(1 + self.args.len());
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Spawns the child process and waits for it to finish.
    ///
    /// Standard streams are inherited from the calling process, so the
    /// child's output goes straight to the caller's terminal.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Io`] when the program cannot be spawned and
    /// [`LaunchError::ChildProcessFailure`] when it exits non-zero or is
    /// terminated by a signal.
    pub fn run(&self) -> Result<(), LaunchError> {
        let status = Command::new(&self.program).args(&self.args).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::ChildProcessFailure {
                program: self.program.to_string_lossy().into_owned(),
                code: status.code(),
            })
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Resolves and runs the two EMC entry points for one install root and one
/// platform.
///
/// Each call is one-shot and stateless: the launcher holds no handles to past
/// invocations, and calling the same operation twice yields two independent
/// child processes with identical argument vectors.
#[derive(Debug, Clone)]
pub struct Launcher {
    root: InstallRoot,
    platform: Platform,
    perl: OsString,
}

impl Launcher {
    /// Creates a launcher for an explicit root and platform, using `perl`
    /// from `PATH` as the interpreter for the setup step.
    pub fn new(root: InstallRoot, platform: Platform) -> Self {
        Self {
            root,
            platform,
            perl: OsString::from("perl"),
        }
    }

    /// Creates a launcher for the host platform.
    pub fn host(root: InstallRoot) -> Result<Self, LaunchError> {
        Ok(Self::new(root, Platform::host()?))
    }

    /// Overrides the Perl interpreter used for the setup step.
    pub fn with_perl(mut self, perl: impl Into<OsString>) -> Self {
        self.perl = perl.into();
        self
    }

    pub fn root(&self) -> &InstallRoot {
        &self.root
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The argv for the setup step: the Perl interpreter, the absolute path
    /// to the bundled `emc_setup.pl`, the input file, then any extra
    /// arguments in caller order, unmodified.
    pub fn setup_invocation(&self, input: &Path, extra: &[OsString]) -> Invocation {
        let mut args = Vec::with_capacity(2 + extra.len());
        args.push(self.root.setup_script().into_os_string());
        args.push(input.as_os_str().to_os_string());
        args.extend(extra.iter().cloned());
        Invocation::new(self.perl.clone(), args)
    }

    /// The argv for the build step: the absolute path to the platform's
    /// simulation executable and the build file as its sole argument.
    pub fn build_invocation(&self, build_file: &Path) -> Invocation {
        Invocation::new(
            self.root.executable(self.platform).into_os_string(),
            vec![build_file.as_os_str().to_os_string()],
        )
    }

    /// Runs `emc_setup.pl` on the given input file, blocking until it exits.
    ///
    /// The Perl interpreter is verified first by invoking its version flag;
    /// if that check fails the setup script is never spawned.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::MissingDependency`] when the Perl check fails.
    /// - [`LaunchError::UnresolvedBinary`] when the bundled script is absent.
    /// - [`LaunchError::ChildProcessFailure`] when the script exits non-zero.
    pub fn run_setup(&self, input: &Path, extra: &[OsString]) -> Result<(), LaunchError> {
        self.ensure_perl()?;
        let script = self.root.setup_script();
        if !script.is_file() {
            return Err(LaunchError::UnresolvedBinary { path: script });
        }
        self.setup_invocation(input, extra).run()
    }

    /// Runs the simulation executable on the given build file, blocking until
    /// it exits.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::UnresolvedBinary`] when the executable for the
    ///   resolved platform is absent from `emc/bin/`.
    /// - [`LaunchError::ChildProcessFailure`] when it exits non-zero.
    pub fn run_build(&self, build_file: &Path) -> Result<(), LaunchError> {
        let executable = self.root.executable(self.platform);
        if !executable.is_file() {
            return Err(LaunchError::UnresolvedBinary { path: executable });
        }
        self.build_invocation(build_file).run()
    }

    fn ensure_perl(&self) -> Result<(), LaunchError> {
        let probe = Command::new(&self.perl)
            .arg("-v")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(LaunchError::MissingDependency {
                reason: format!(
                    "'{} -v' exited with status {}",
                    self.perl.to_string_lossy(),
                    status.code().map_or_else(|| "unknown".to_string(), |c| c.to_string())
                ),
            }),
            Err(e) => Err(LaunchError::MissingDependency {
                reason: format!("failed to invoke '{}': {}", self.perl.to_string_lossy(), e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn launcher_at(root: &Path, platform: Platform) -> Launcher {
        Launcher::new(InstallRoot::new(root), platform)
    }

    #[test]
    fn setup_argv_is_perl_then_script_then_input_then_extras() {
        let launcher = launcher_at(Path::new("/opt/emc"), Platform::Linux);
        let extra = vec![OsString::from("-quiet"), OsString::from("-seed=42")];

        let invocation = launcher.setup_invocation(Path::new("name.esh"), &extra);

        assert_eq!(
            invocation.argv(),
            vec![
                OsString::from("perl"),
                OsString::from("/opt/emc/emc/scripts/emc_setup.pl"),
                OsString::from("name.esh"),
                OsString::from("-quiet"),
                OsString::from("-seed=42"),
            ]
        );
    }

    #[test]
    fn build_argv_is_executable_then_build_file() {
        let launcher = launcher_at(Path::new("/opt/emc"), Platform::Linux);

        let invocation = launcher.build_invocation(Path::new("build.emc"));

        assert_eq!(
            invocation.argv(),
            vec![
                OsString::from("/opt/emc/emc/bin/emc_linux_x86_64"),
                OsString::from("build.emc"),
            ]
        );
    }

    #[test]
    fn build_argv_selects_the_platform_executable() {
        let root = Path::new("/opt/emc");
        let build_file = Path::new("build.emc");

        for (platform, expected) in [
            (Platform::Linux, "/opt/emc/emc/bin/emc_linux_x86_64"),
            (Platform::MacOS, "/opt/emc/emc/bin/emc_macos"),
            (Platform::Windows, "/opt/emc/emc/bin/emc_win32.exe"),
        ] {
            let invocation = launcher_at(root, platform).build_invocation(build_file);
            assert_eq!(invocation.program(), OsStr::new(expected));
        }
    }

    #[test]
    fn repeated_invocations_are_independent_and_identical() {
        let launcher = launcher_at(Path::new("/opt/emc"), Platform::MacOS);

        let first = launcher.setup_invocation(Path::new("name.esh"), &[]);
        let second = launcher.setup_invocation(Path::new("name.esh"), &[]);

        assert_eq!(first, second);
        assert_eq!(first.argv(), second.argv());
    }

    #[test]
    fn custom_perl_interpreter_is_used_for_setup() {
        let launcher =
            launcher_at(Path::new("/opt/emc"), Platform::Linux).with_perl("/usr/local/bin/perl");

        let invocation = launcher.setup_invocation(Path::new("name.esh"), &[]);

        assert_eq!(invocation.program(), OsStr::new("/usr/local/bin/perl"));
    }

    #[test]
    fn run_setup_fails_with_missing_dependency_when_perl_is_absent() {
        let temp_dir = tempdir().unwrap();
        let launcher = launcher_at(temp_dir.path(), Platform::Linux)
            .with_perl("/nonexistent/definitely-not-perl");

        let err = launcher.run_setup(Path::new("name.esh"), &[]).unwrap_err();

        assert!(matches!(err, LaunchError::MissingDependency { .. }));
    }

    #[test]
    fn run_build_fails_with_unresolved_binary_when_executable_is_absent() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("emc/bin")).unwrap();
        let launcher = launcher_at(temp_dir.path(), Platform::Linux);

        let err = launcher.run_build(Path::new("build.emc")).unwrap_err();

        match err {
            LaunchError::UnresolvedBinary { path } => {
                assert_eq!(
                    path,
                    temp_dir.path().join("emc/bin").join("emc_linux_x86_64")
                );
            }
            other => panic!("expected UnresolvedBinary, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn run_surfaces_a_nonzero_exit_as_child_process_failure() {
        let invocation = Invocation::new("false", vec![]);

        let err = invocation.run().unwrap_err();

        match err {
            LaunchError::ChildProcessFailure { program, code } => {
                assert_eq!(program, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected ChildProcessFailure, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn run_succeeds_for_a_zero_exit() {
        let invocation = Invocation::new("true", vec![]);
        assert!(invocation.run().is_ok());
    }

    #[test]
    fn run_reports_io_error_for_an_unspawnable_program() {
        let invocation = Invocation::new(
            PathBuf::from("/nonexistent/emc_linux_x86_64").into_os_string(),
            vec![OsString::from("build.emc")],
        );

        assert!(matches!(invocation.run(), Err(LaunchError::Io(_))));
    }

    #[test]
    fn display_renders_the_full_command_line() {
        let launcher = launcher_at(Path::new("/opt/emc"), Platform::Linux);
        let invocation =
            launcher.setup_invocation(Path::new("name.esh"), &[OsString::from("-quiet")]);

        assert_eq!(
            invocation.to_string(),
            "perl /opt/emc/emc/scripts/emc_setup.pl name.esh -quiet"
        );
    }
}
