// Word encoding — one-hot tensors, overlap counts, and structural masks.

pub mod alphabet;
pub mod masks;
pub mod onehot;
pub mod overlap;
pub mod tensor;
pub mod traits;
