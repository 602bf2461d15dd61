use crate::parser::AstNode;

use super::CodeGen;

/*
    Every program shares one fixed preamble:
    - `@pointer` is the data pointer (an i32 index into the tape)
    - `@tape` is the whole addressable memory, zero initialised
    - `@print` writes one cell as an unsigned integer through printf

    Registers are plain numbered values (`%1`, `%2`, ...) handed out strictly
    left to right, loops get a pair of labels each (`loop{start}`, `loop{end}_end`).
*/

pub const HEADER: &str = concat!(
    "source_filename = \"main.c\"\n",
    "target datalayout = \"e-m:e-p270:32:32-p271:32:32-p272:64:64-i64:64-i128:128-f80:128-n8:16:32:64-S128\"\n",
    "target triple = \"x86_64-pc-linux-gnu\"",
);

pub const VAR_TAPE: &str = "@tape = dso_local global [4294967296 x i8] zeroinitializer, align 16";

pub const VAR_POINTER: &str = "@pointer = dso_local global i32 0, align 4";

pub const VAR_FORMAT: &str =
    r#"@.str = private unnamed_addr constant [11 x i8] c"Print: %u\0A\00", align 1"#;

pub const FN_PRINT: &str = concat!(
    "define dso_local void @print(i8 noundef zeroext %0) #0 {\n",
    "  %2 = alloca i8, align 1\n",
    "  store i8 %0, ptr %2, align 1\n",
    "  %3 = load i8, ptr %2, align 1\n",
    "  %4 = zext i8 %3 to i32\n",
    "  %5 = call i32 (ptr, ...) @printf(ptr noundef @.str, i32 noundef %4)\n",
    "  ret void\n",
    "}\n",
    "\n",
    "declare i32 @printf(ptr noundef, ...)",
);

pub const MAIN_START: &str = "define i32 @main() {";

pub const MAIN_END: &str = "ret i32 0\n}";

/// Registers used by each lowering
pub const POINTER_OP_REGISTERS: usize = 2;
pub const VALUE_OP_REGISTERS: usize = 7;
pub const OUTPUT_REGISTERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arith {
    Add,
    Sub,
}

enum Work<'a> {
    Lower(&'a AstNode),
    CloseLoop { start: usize, end: usize },
}

#[derive(Debug, Clone)]
pub struct LlvmCodeGen {
    instructions: Vec<String>,

    /// Next free label id, each loop takes two
    loop_counter: usize,

    /// Next free register id, starts at 1
    var_counter: usize,
}

impl LlvmCodeGen {
    pub fn var_counter(&self) -> usize {
        self.var_counter
    }

    pub fn loop_counter(&self) -> usize {
        self.loop_counter
    }

    /// The fragments emitted so far (preamble included)
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    fn emit(&mut self, instruction: impl Into<String>) {
        self.instructions.push(instruction.into());
    }

    fn emit_preamble(&mut self) {
        for fragment in [HEADER, VAR_POINTER, VAR_FORMAT, VAR_TAPE, FN_PRINT, MAIN_START] {
            self.emit(fragment);
        }
    }

    fn emit_shift_pointer(&mut self, op: Arith, amount: usize) {
        let r0 = self.var_counter;
        let r1 = r0 + 1;
        let opcode = match op {
            Arith::Add => "add",
            Arith::Sub => "sub",
        };
        self.emit(format!(
            "%{r0} = load i32, ptr @pointer\n\
             %{r1} = {opcode} i32 %{r0}, {amount}\n\
             store i32 %{r1}, ptr @pointer"
        ));
        self.var_counter += POINTER_OP_REGISTERS;
    }

    fn emit_deref_arith(&mut self, op: Arith, amount: u8) {
        let r0 = self.var_counter;
        let (r1, r2, r3, r4, r5, r6) = (r0 + 1, r0 + 2, r0 + 3, r0 + 4, r0 + 5, r0 + 6);
        let arith = match op {
            Arith::Add => format!("add nsw i32 {amount}, %{r4}"),
            Arith::Sub => format!("sub nsw i32 %{r4}, {amount}"),
        };
        self.emit(format!(
            "%{r0} = load i32, ptr @pointer\n\
             %{r1} = zext i32 %{r0} to i64\n\
             %{r2} = getelementptr inbounds [0 x i8], ptr @tape, i64 0, i64 %{r1}\n\
             %{r3} = load i8, ptr %{r2}\n\
             %{r4} = zext i8 %{r3} to i32\n\
             %{r5} = {arith}\n\
             %{r6} = trunc i32 %{r5} to i8\n\
             store i8 %{r6}, ptr %{r2}"
        ));
        self.var_counter += VALUE_OP_REGISTERS;
    }

    fn emit_out(&mut self) {
        let r0 = self.var_counter;
        let (r1, r2, r3) = (r0 + 1, r0 + 2, r0 + 3);
        self.emit(format!(
            "%{r0} = load i32, ptr @pointer\n\
             %{r1} = zext i32 %{r0} to i64\n\
             %{r2} = getelementptr inbounds [4294967296 x i8], ptr @tape, i64 0, i64 %{r1}\n\
             %{r3} = load i8, ptr %{r2}\n\
             call void @print(i8 noundef zeroext %{r3})"
        ));
        self.var_counter += OUTPUT_REGISTERS;
    }

    /// Reserves a label pair and emits everything up to the loop body
    fn open_loop(&mut self) -> (usize, usize) {
        let start = self.loop_counter;
        let end = start + 1;
        self.loop_counter += 2;

        self.emit(format!("br label %loop{start}"));
        self.emit(format!("loop{start}:"));
        self.emit("call i1 @is_zero()");
        self.emit(format!(
            "br i1 %retval, label %loop{end}_end, label %loop{start}_body"
        ));
        self.emit(format!("loop{start}_body:"));
        (start, end)
    }

    fn close_loop(&mut self, start: usize, end: usize) {
        // back to the condition
        self.emit(format!("br label %loop{start}"));
        self.emit(format!("loop{end}_end:"));
    }

    /// Lowers nodes in document order.
    ///
    /// Loop bodies are walked with an explicit work stack rather than recursion
    /// so any nesting depth can be lowered.
    pub fn lower(&mut self, nodes: &[AstNode]) {
        let mut work: Vec<Work> = nodes.iter().rev().map(Work::Lower).collect();

        while let Some(item) = work.pop() {
            match item {
                Work::Lower(node) => match node {
                    AstNode::PointerIncrement => self.emit_shift_pointer(Arith::Add, 1),
                    AstNode::PointerDecrement => self.emit_shift_pointer(Arith::Sub, 1),
                    AstNode::ValueIncrement => self.emit_deref_arith(Arith::Add, 1),
                    AstNode::ValueDecrement => self.emit_deref_arith(Arith::Sub, 1),
                    AstNode::Output => self.emit_out(),
                    // TODO: lower `,` to a getchar call once the runtime declares one
                    AstNode::Input => self.emit(""),
                    AstNode::Loop(children) => {
                        let (start, end) = self.open_loop();
                        work.push(Work::CloseLoop { start, end });
                        work.extend(children.iter().rev().map(Work::Lower));
                    }
                    // literals have no lowering until repeat counts exist
                    AstNode::NumericLiteral(_)
                    | AstNode::CharacterLiteral(_)
                    | AstNode::Return => {}
                },
                Work::CloseLoop { start, end } => self.close_loop(start, end),
            }
        }
    }

    pub fn generate_node(&mut self, node: &AstNode) {
        self.lower(std::slice::from_ref(node));
    }
}

impl CodeGen for LlvmCodeGen {
    fn new() -> Self {
        let mut codegen = LlvmCodeGen {
            instructions: vec![],
            loop_counter: 0,
            var_counter: 1,
        };
        codegen.emit_preamble();
        codegen
    }

    fn load(&mut self, program: &[AstNode]) {
        self.lower(program);
    }

    fn finish(mut self) -> String {
        self.emit(MAIN_END);
        self.instructions.join("\n")
    }
}
