//! Execution of symbolic bytecode against a [`SymbolTable`].

use symb_table::{SharedNoticeHandler, Symbol, SymbolTable};

use crate::{Decoder, ExecError, Instruction};

/// What a run does when `SYMBOL_APPLY` names an unbound identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UndefinedPolicy {
    /// Record the identifier in [`RunReport::undefined`] and keep going.
    #[default]
    Continue,
    /// Stop the run with [`ExecError::Undefined`].
    Abort,
}

/// Outcome of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Instructions executed, `HALT` included.
    pub steps: usize,
    /// `true` if the run stopped at `HALT` rather than the end of the program.
    pub halted: bool,
    /// Successful applies, in execution order.
    pub applied: Vec<Symbol>,
    /// Identifiers of failed applies, in execution order.
    pub undefined: Vec<u8>,
}

/// Runs programs against an owned symbol table.
///
/// The table persists across runs; call [`SymbolTable::initialize`] through
/// [`Machine::table_mut`] to start over.
#[derive(Debug)]
pub struct Machine {
    table: SymbolTable,
    on_undefined: UndefinedPolicy,
}

impl Machine {
    /// Create a machine with a fresh table and default settings.
    pub fn new() -> Self {
        MachineBuilder::new().build()
    }

    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SymbolTable {
        &mut self.table
    }

    pub fn into_table(self) -> SymbolTable {
        self.table
    }

    pub fn on_undefined(&self) -> UndefinedPolicy {
        self.on_undefined
    }

    /// Execute `program` until `HALT` or the end of the bytes.
    ///
    /// Instructions before a decode error have already taken effect on the
    /// table when the error is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(len = program.len()))]
    pub fn run(&mut self, program: &[u8]) -> Result<RunReport, ExecError> {
        let mut report = RunReport::default();
        for item in Decoder::new(program) {
            let (offset, instruction) = item?;
            report.steps += 1;
            tracing::trace!(offset, %instruction, "step");

            match instruction {
                Instruction::Halt => {
                    report.halted = true;
                    break;
                }
                Instruction::SymbolDefine { id, value } => self.table.define(id, value),
                Instruction::SymbolApply { id } => match self.table.apply(id) {
                    Ok(value) => report.applied.push(Symbol::new(id, value)),
                    Err(source) => match self.on_undefined {
                        UndefinedPolicy::Continue => report.undefined.push(id),
                        UndefinedPolicy::Abort => {
                            tracing::debug!(offset, id, "aborting on undefined symbol");
                            return Err(ExecError::Undefined { offset, source });
                        }
                    },
                },
                Instruction::MetaReflect => {
                    self.table.reflect();
                }
            }
        }
        tracing::debug!(steps = report.steps, halted = report.halted, "run finished");
        Ok(report)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Machine`].
#[derive(Default)]
pub struct MachineBuilder {
    table: Option<SymbolTable>,
    notices: Option<SharedNoticeHandler>,
    on_undefined: UndefinedPolicy,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing table instead of a fresh one.
    #[must_use]
    pub fn table(mut self, table: SymbolTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the notice handler for the machine's table.
    ///
    /// Overrides the handler of a table passed to [`table`](Self::table).
    #[must_use]
    pub fn notices(mut self, notices: SharedNoticeHandler) -> Self {
        self.notices = Some(notices);
        self
    }

    #[must_use]
    pub fn on_undefined(mut self, policy: UndefinedPolicy) -> Self {
        self.on_undefined = policy;
        self
    }

    pub fn build(self) -> Machine {
        let table = match (self.table, self.notices) {
            (Some(mut table), Some(notices)) => {
                table.set_notices(notices);
                table
            }
            (Some(table), None) => table,
            (None, Some(notices)) => SymbolTable::with_notices(notices),
            (None, None) => SymbolTable::new(),
        };
        Machine {
            table,
            on_undefined: self.on_undefined,
        }
    }
}
