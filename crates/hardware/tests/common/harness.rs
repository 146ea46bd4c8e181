use mipsim_core::Cpu;
use mipsim_core::common::{BitVector, SimError, SimResult};
use mipsim_core::config::Config;
use mipsim_core::core::cpu::HaltReason;

pub struct TestContext {
    pub cpu: Cpu,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("warn")
            .try_init();
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Compatibility-mode engine with default capacities.
    pub fn compat() -> Self {
        let mut ctx = Self::new();
        ctx.cpu.set_compat_jump_offset(true);
        ctx
    }

    /// Load a sequence of encoded instructions in order.
    pub fn load_program(mut self, instructions: &[BitVector]) -> Self {
        for inst in instructions {
            let _ = self.cpu.load_instruction(inst.clone()).unwrap();
        }
        self
    }

    /// Load instructions written as digit strings (whitespace ignored).
    pub fn load_text(self, instructions: &[&str]) -> Self {
        let parsed: Vec<BitVector> = instructions.iter().map(|s| s.parse().unwrap()).collect();
        self.load_program(&parsed)
    }

    /// Set a general-purpose register to an integer value.
    pub fn set_reg(&mut self, reg: usize, val: i64) {
        self.cpu
            .set_register(reg, &BitVector::from_value(32, val))
            .unwrap();
    }

    /// Builder form of [`Self::set_reg`].
    pub fn with_reg(mut self, reg: usize, val: i64) -> Self {
        self.set_reg(reg, val);
        self
    }

    /// Read a general-purpose register as an unsigned integer.
    pub fn get_reg(&self, reg: usize) -> u64 {
        self.cpu.get_register(reg).unwrap().to_integer()
    }

    /// Read a general-purpose register as a signed integer.
    pub fn get_reg_signed(&self, reg: usize) -> i64 {
        self.cpu.get_register(reg).unwrap().to_signed()
    }

    /// Read a data memory word as a signed integer.
    pub fn get_mem(&self, address: u64) -> i64 {
        self.cpu.get_data_memory(address).unwrap().to_signed()
    }

    pub fn pc(&self) -> u64 {
        self.cpu.program_counter().to_integer()
    }

    pub fn run(&mut self) -> SimResult<HaltReason> {
        self.cpu.execute()
    }

    /// Run to completion, expecting a clean halt.
    pub fn run_ok(mut self) -> Self {
        let _ = self.cpu.execute().unwrap();
        self
    }

    pub fn diagnostics(&self) -> &[SimError] {
        self.cpu.diagnostics()
    }
}
