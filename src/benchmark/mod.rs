pub mod tick_bench;
