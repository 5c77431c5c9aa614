pub mod command_executor;

pub use command_executor::{
    CommandExecutor,
    CommandExecutorError,
    CommandRunner,
    CommandSpec,
    ExecutionConfig,
    ExecutionResult,
};
