// ============================================================================
// Operations Module
// The operation set of `Vector`, grouped by concern
// ============================================================================
//
// Every submodule adds an `impl Vector` block; nothing is re-exported.
//
// - arithmetic: add, subtract, scalar_multiply, negate
// - metric: magnitude, normalize, dot_product, get_angle
// - relations: is_zero_vector, is_parallel, is_orthogonal
// - projection: parallel/orthogonal projection and decomposition
// - cross: cross product, parallelogram and triangle area (3D only)

mod arithmetic;
mod cross;
mod metric;
mod projection;
mod relations;
