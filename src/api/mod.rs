pub mod minimal_dus;
