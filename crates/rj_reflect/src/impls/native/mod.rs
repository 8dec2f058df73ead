mod native_array;
mod native_num;
mod native_ref;
mod native_str;

pub(crate) use native_array::slice_iter;
