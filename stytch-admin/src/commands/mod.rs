pub mod allow_all_jit;
pub mod update_rbac_policy;

pub use allow_all_jit::AllowAllJit;
pub use update_rbac_policy::UpdateRbacPolicy;
