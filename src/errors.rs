error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        UnresolvedFunctionDefinition(function: String) {
            description("unresolved function definition")
            display("no parameter definition found for function '{}'", function)
        }
        CyclicGraphDependency {
            description("graph is cyclic")
            display("cyclic dependency between graph nodes")
        }
    }
}
