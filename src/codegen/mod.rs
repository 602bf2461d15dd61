pub mod llvm;

use crate::parser::AstNode;

pub use self::llvm::LlvmCodeGen;

/// A backend lowering a parsed program into its textual output.
///
/// One instance covers exactly one compile, `finish` consumes it.
pub trait CodeGen {
    fn new() -> Self;

    fn load(&mut self, program: &[AstNode]);

    fn finish(self) -> String;
}

/// Lowers a whole program into LLVM IR text
pub fn generate(program: &[AstNode]) -> String {
    let mut codegen = LlvmCodeGen::new();
    codegen.load(program);
    codegen.finish()
}
