pub mod parent_child;
