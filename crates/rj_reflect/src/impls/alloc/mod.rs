mod borrow;
mod boxed;
mod linked_list;
mod rc;
mod string;
mod vec;
mod vec_deque;
